use std::sync::OnceLock;

use anyhow::{bail, Context};
use canvas_api::{AccessToken, Canvas};
use directories::ProjectDirs;
use tracing::debug;
use url::Url;

use crate::config::Config;

pub fn project_dirs() -> &'static ProjectDirs {
    static PROJECT_DIRS: OnceLock<ProjectDirs> = OnceLock::new();

    PROJECT_DIRS.get_or_init(|| {
        ProjectDirs::from("edu", "Canvas", "Canvas CLI")
            .expect("no valid home directory path could be retrieved from the operating system")
    })
}

pub fn shared_http() -> reqwest::Client {
    static SHARED: OnceLock<reqwest::Client> = OnceLock::new();

    SHARED.get_or_init(reqwest::Client::new).clone()
}

/// Selects the Canvas instance to talk to.
///
/// The environment takes precedence over the configuration file.
#[derive(Debug, clap::Args)]
pub struct Connection {
    /// The name of a configured account.
    #[arg(short, long)]
    account: Option<String>,
    /// The URL of the Canvas instance.
    #[arg(long, env = "CANVAS_BASE_URL", value_hint = clap::ValueHint::Url)]
    base_url: Option<Url>,
    /// An API access token for the Canvas instance.
    #[arg(long, env = "CANVAS_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl Connection {
    pub async fn connect(self) -> anyhow::Result<Canvas> {
        if let (Some(base_url), Some(token)) = (&self.base_url, self.token.as_deref()) {
            debug!(%base_url, "Using connection from the environment");
            return Ok(Canvas::new(shared_http(), base_url, token.into())?);
        }

        let config = Config::read().await?;
        if !config.has_accounts() {
            bail!("No accounts configured. To add an account, use the add subcommand.");
        }
        let (name, account) = config.account(self.account.as_deref()).with_context(|| {
            match &self.account {
                Some(name) => format!("No account named \"{name}\""),
                None => "Several accounts configured. Select one with --account.".to_string(),
            }
        })?;
        debug!(name, %account, "Using configured account");

        let base_url = self.base_url.as_ref().unwrap_or(&account.base_url);
        let token = self
            .token
            .map_or_else(|| account.token.clone(), AccessToken::from);
        Ok(Canvas::new(shared_http(), base_url, token)?)
    }
}

/// Displays an optional attribute, or a dash if it is missing.
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!("-", or_dash(None));
        assert_eq!("Quiz", or_dash(Some("Quiz")));
    }
}
