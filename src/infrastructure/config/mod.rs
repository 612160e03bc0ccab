use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::error::{AppError, Result};

/// Environment variables with this prefix override file and default values
pub const ENV_PREFIX: &str = "CSVTOJSON_";

/// Settings for the converter's network collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// User-Agent header sent with remote CSV requests
    pub user_agent: String,

    /// Whole-request deadline; `None` waits as long as the server does
    pub request_timeout_secs: Option<u64>,

    pub connect_timeout_secs: Option<u64>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("csvtojson/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then `CSVTOJSON_*` environment variables (a `.env` file is
    /// loaded first when present)
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Defaults, then the TOML file at `path`, then the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = Some(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(AppError::Config("user_agent must not be empty".to_string()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(AppError::Config("request_timeout_secs must be > 0".to_string()));
        }
        if self.connect_timeout_secs == Some(0) {
            return Err(AppError::Config("connect_timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }
}
