use canvas_api::{AccessToken, Canvas};
use dialoguer::Password;
use tokio::task;
use url::Url;

use crate::{
    config::{AccountConfig, Config},
    util,
};

/// Adds a new account to the configuration.
#[derive(Debug, clap::Args)]
pub struct Subcommand {
    /// The name to refer to the account by.
    name: String,
    /// The URL of the Canvas instance.
    #[arg(value_hint = clap::ValueHint::Url)]
    url: Url,
}

impl Subcommand {
    /// Prompts for an access token and stores it once Canvas accepts it.
    ///
    /// Generate the token on the Canvas website under Account > Settings >
    /// Approved Integrations. It is saved in plain text in the config file.
    pub async fn run(self) -> anyhow::Result<()> {
        let config_task = tokio::spawn(Config::read());

        let token: AccessToken =
            task::spawn_blocking(|| Password::new().with_prompt("Access token").interact())
                .await??
                .into();

        let canvas = Canvas::new(util::shared_http(), &self.url, token.clone())?;
        let user = canvas.get_current_user().await?;
        let account_config = AccountConfig {
            user: user.name.unwrap_or_else(|| user.id.to_string()),
            base_url: self.url,
            token,
        };

        let mut config = config_task.await??;
        let account_name = account_config.to_string();
        config.accounts.insert(self.name, account_config);
        config.write().await?;

        eprintln!("Successfully added {account_name}");

        Ok(())
    }
}
