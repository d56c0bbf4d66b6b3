use clap::Parser;
use serde::Deserialize;
use snafu::{ResultExt, ensure};
use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::error::{ConfigFileSnafu, ConfigParseSnafu, ConfigSnafu};

/// Overrides `api_url` from the config file when set
pub const API_URL_ENV: &str = "API_BASE_URL";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub port: u16,
    pub api_url: String,

    /// Serve placeholder item details when the upstream fails
    #[serde(default = "default_fallback")]
    pub fallback: bool,
}

fn default_fallback() -> bool {
    true
}

impl Config {
    pub fn build(filename: &PathBuf) -> Result<Config> {
        let toml_string = fs::read_to_string(filename).context(ConfigFileSnafu)?;
        let config = Self::parse(toml_string.as_str())?;
        let config = config.with_api_url_override(std::env::var(API_URL_ENV).ok());
        config.validate()
    }

    pub fn parse(toml_string: &str) -> Result<Config> {
        let config: Config = toml::from_str(toml_string).context(ConfigParseSnafu)?;
        Ok(config)
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        self
    }

    pub fn validate(mut self) -> Result<Config> {
        // Paths are appended as "/items", avoid a double slash
        self.api_url = self.api_url.trim_end_matches('/').to_string();

        ensure!(
            self.api_url.len() > 0,
            ConfigSnafu {
                msg: "API URL is required.".to_string()
            }
        );
        ensure!(
            self.api_url.starts_with("http://") || self.api_url.starts_with("https://"),
            ConfigSnafu {
                msg: "API URL must be an http or https URL.".to_string()
            }
        );
        ensure!(
            self.port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );

        Ok(self)
    }
}

/// Same-origin proxy for the inventory API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, value_name = "config.toml")]
    pub config: PathBuf,
}
