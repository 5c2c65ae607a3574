use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use canvas_api::AccessToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};
use url::Url;

use crate::util;

#[derive(Error, Debug)]
pub enum TomlReadError {
    #[error("I/O error")]
    IoError(#[from] io::Error),
    #[error("TOML deserialization error")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum TomlWriteError {
    #[error("I/O error")]
    IoError(#[from] io::Error),
    #[error("TOML serialization error")]
    TomlError(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AccountConfig {
    pub user: String,
    pub base_url: Url,
    pub token: AccessToken,
}

impl Display for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.user, self.base_url)
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountConfig>,
}

impl Config {
    #[must_use]
    pub fn path() -> &'static Path {
        static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

        CONFIG_PATH
            .get_or_init(|| {
                let project_dirs = util::project_dirs();
                let mut config_path = project_dirs.config_dir().join(project_dirs.project_path());
                config_path.set_extension("toml");
                config_path
            })
            .as_path()
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// Picks the account called `name`, or the only configured one.
    pub fn account(&self, name: Option<&str>) -> Option<(&str, &AccountConfig)> {
        match name {
            Some(name) => self.accounts.get_key_value(name),
            None if self.accounts.len() == 1 => self.accounts.iter().next(),
            None => None,
        }
        .map(|(name, account)| (name.as_str(), account))
    }

    pub async fn read() -> Result<Self, TomlReadError> {
        let string_result = fs::read_to_string(Self::path()).await;
        if matches!(&string_result, Err(err) if err.kind() == ErrorKind::NotFound) {
            return Ok(Self::default());
        }
        toml::from_str(&string_result?).map_err(Into::into)
    }

    pub async fn write(&self) -> Result<(), TomlWriteError> {
        let toml = toml::to_string_pretty(self)?;
        fs::create_dir_all(util::project_dirs().config_dir()).await?;
        let mut config_file = File::create(Self::path()).await?;
        config_file.write_all(toml.as_bytes()).await?;
        config_file.flush().await?;
        Ok(())
    }
}

/// Prints the path of the configuration file.
#[derive(Debug, clap::Args)]
pub struct Subcommand {}

impl Subcommand {
    pub async fn run(self) -> anyhow::Result<()> {
        println!("{}", Config::path().display());
        Ok(())
    }
}
