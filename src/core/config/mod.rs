//! core::config
//!
//! Configuration schema and loading.
//!
//! # Table Directory
//!
//! The one setting that matters is where the table file lives. It is
//! resolved in this order (earlier wins):
//! 1. `--table-dir` CLI flag (passed in by the caller)
//! 2. `$ENVC_TABLE_PATH` if set and non-empty
//! 3. `table_dir` in the global config file
//! 4. `/tmp`
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$ENVC_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/envc/config.toml`
//! 3. `~/.envc/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use envc::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! println!("Table dir: {}", result.config.table_dir(None).display());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Built-in table directory when nothing else is configured.
pub const DEFAULT_TABLE_DIR: &str = "/tmp";

/// Environment variable naming the table directory.
pub const TABLE_DIR_ENV: &str = "ENVC_TABLE_PATH";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ENVC_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {message}", .path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Process environment inputs to config loading.
///
/// Captured once so loading can be tested without touching the real
/// environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// `$ENVC_CONFIG`
    pub explicit: Option<PathBuf>,
    /// `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// The user's home directory
    pub home: Option<PathBuf>,
    /// `$ENVC_TABLE_PATH`
    pub table_dir: Option<PathBuf>,
}

impl ConfigSources {
    /// Read sources from the process environment.
    pub fn from_env() -> Self {
        Self {
            explicit: non_empty(std::env::var_os(CONFIG_ENV)),
            xdg_config_home: non_empty(std::env::var_os("XDG_CONFIG_HOME")),
            home: dirs::home_dir(),
            table_dir: non_empty(std::env::var_os(TABLE_DIR_ENV)),
        }
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration file contents
    pub global: GlobalConfig,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Table directory from the environment
    env_table_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration using the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        Self::load_from(&ConfigSources::from_env())
    }

    /// Load configuration from explicit sources.
    pub fn load_from(sources: &ConfigSources) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        if let Some(explicit) = &sources.explicit {
            if !explicit.exists() {
                warnings.push(ConfigWarning {
                    message: format!("{} points to a missing file, ignoring it", CONFIG_ENV),
                    path: explicit.clone(),
                });
            }
        }

        let (global, global_path) = match Self::candidates(sources)
            .into_iter()
            .find(|path| path.exists())
        {
            Some(path) => (Self::read_global_config(&path)?, Some(path)),
            None => (GlobalConfig::default(), None),
        };

        global.validate()?;

        if let Some(path) = &global_path {
            log::debug!("loaded config from {}", path.display());
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                global_path,
                env_table_dir: sources.table_dir.clone(),
            },
            warnings,
        })
    }

    /// Config file locations, in search order.
    fn candidates(sources: &ConfigSources) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = &sources.explicit {
            paths.push(explicit.clone());
        }
        if let Some(xdg) = &sources.xdg_config_home {
            paths.push(xdg.join("envc/config.toml"));
        }
        if let Some(home) = &sources.home {
            paths.push(home.join(".envc/config.toml"));
        }
        paths
    }

    /// Read and parse a global config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the config file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Resolve the table directory.
    ///
    /// `flag` is the `--table-dir` value and beats every other source.
    pub fn table_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.env_table_dir.clone())
            .or_else(|| self.global.table_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_DIR))
    }

    /// Check if confirmation messages are suppressed by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }
}
