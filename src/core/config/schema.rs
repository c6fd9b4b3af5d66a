//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (first existing file wins):
//! 1. `$ENVC_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/envc/config.toml`
//! 3. `~/.envc/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing. Unknown keys are rejected by
//! the parser.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// table_dir = "/var/lib/envc"
/// quiet = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Directory holding the table file
    pub table_dir: Option<PathBuf>,

    /// Suppress confirmation messages by default
    pub quiet: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.table_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "table_dir cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
