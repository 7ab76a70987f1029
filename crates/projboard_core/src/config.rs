//! Runtime configuration resolved from environment variables.
//!
//! - `PROJBOARD_LOG_LEVEL`: `trace|debug|info|warn|error`; defaults by build mode.
//! - `PROJBOARD_LOG_DIR`: absolute directory for rolling logs; unset disables
//!   file logging.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "PROJBOARD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PROJBOARD_LOG_DIR";

/// Effective application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, source: LoggingError },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, source } => write!(f, "invalid `{key}`: {source}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue { source, .. } => Some(source),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_level = match read(LOG_LEVEL_ENV) {
            Some(raw) => normalize_level(&raw).map_err(|source| ConfigError::InvalidValue {
                key: LOG_LEVEL_ENV,
                source,
            })?,
            None => default_log_level(),
        };

        let log_dir = read(LOG_DIR_ENV)
            .map(|raw| normalize_log_dir(&raw))
            .transpose()
            .map_err(|source| ConfigError::InvalidValue {
                key: LOG_DIR_ENV,
                source,
            })?;

        Ok(Self { log_level, log_dir })
    }
}
