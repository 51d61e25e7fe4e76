use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub const STORAGE_KEY_ENV: &str = "PERSON_LIST_STORAGE_KEY";
pub const NOTIFICATION_TTL_ENV: &str = "PERSON_LIST_NOTIFICATION_TTL_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { name, value } => {
                write!(f, "invalid value for {}: {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the person list application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key the person list is persisted under.
    pub storage_key: String,
    /// How long a count-change message stays visible.
    pub notification_ttl_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "persons".into(),
            notification_ttl_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `PERSON_LIST_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(STORAGE_KEY_ENV) {
            if v.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: STORAGE_KEY_ENV.into(),
                    value: v,
                });
            }
            config.storage_key = v;
        }

        if let Some(v) = lookup(NOTIFICATION_TTL_ENV) {
            config.notification_ttl_ms = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: NOTIFICATION_TTL_ENV.into(),
                value: v.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}
