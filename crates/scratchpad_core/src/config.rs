//! Runtime configuration for scratchpad hosts.
//!
//! # Responsibility
//! - Resolve database path, logging settings and persist policy.
//! - Layer sources as: defaults < JSON file < environment < explicit flags.
//!
//! # Invariants
//! - Resolution never touches the database or the logger.
//! - Unknown persist policy values are rejected rather than defaulted.

use crate::logging::default_log_level;
use crate::session::PersistPolicy;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "SCRATCHPAD_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "SCRATCHPAD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "SCRATCHPAD_LOG_DIR";
pub const ENV_PERSIST_POLICY: &str = "SCRATCHPAD_PERSIST_POLICY";

const DEFAULT_DB_FILE_NAME: &str = "scratchpad.sqlite3";

/// Error raised while resolving configuration.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config JSON `{}`: {source}", path.display())
            }
            Self::InvalidValue { key, value } => write!(f, "invalid value `{value}` for {key}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Resolved scratchpad configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScratchpadConfig {
    /// SQLite file holding the notes blob.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory. Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub persist_policy: PersistPolicy,
}

impl Default for ScratchpadConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            persist_policy: PersistPolicy::default(),
        }
    }
}

impl ScratchpadConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults overlaid with `SCRATCHPAD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, ignoring blank values.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = lookup(ENV_DB_PATH) {
            self.db_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(policy) = lookup(ENV_PERSIST_POLICY) {
            self.persist_policy =
                PersistPolicy::parse(&policy).ok_or(ConfigError::InvalidValue {
                    key: ENV_PERSIST_POLICY,
                    value: policy,
                })?;
        }
        Ok(self)
    }
}
