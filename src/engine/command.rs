//! engine::command
//!
//! Validated requests: the shape check between raw arguments and the store.
//!
//! # Argument Shapes
//!
//! | verb | required | optional | validation |
//! |---|---|---|---|
//! | `version` | | | |
//! | `create` | | `<path>` | defaults to the configured directory |
//! | `show` | | | |
//! | `append` | `<name>` | `<value>` | `true` or `false`, default `true` |
//! | `update` | `<name>` `<value>` | | `true` or `false` |
//! | `remove` | `<name>` | `force` | literally `force` |
//! | `restore` | `<name>` | | |
//!
//! Anything else is `TableError::InvalidArgument`, raised before the table
//! is read.
//!
//! # Example
//!
//! ```
//! use envc::core::table::RemoveMode;
//! use envc::engine::command::Request;
//!
//! let request = Request::parse("remove", &["VIRTUALENV", "force"]).unwrap();
//! assert_eq!(
//!     request,
//!     Request::Remove { name: "VIRTUALENV".into(), mode: RemoveMode::Force }
//! );
//! assert!(Request::parse("remove", &["VIRTUALENV", "now"]).is_err());
//! ```

use std::path::PathBuf;

use crate::core::table::{RemoveMode, TableError};
use crate::core::types::Toggle;

/// The literal that turns a soft remove into a hard one.
pub const FORCE: &str = "force";

/// One validated operation for the engine to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Print the version and resolved table path.
    Version,
    /// Create (or wipe) the table, in `dir` or the configured directory.
    Create { dir: Option<PathBuf> },
    /// List active and inactive entries.
    Show,
    /// Append a new active entry.
    Append { name: String, value: Toggle },
    /// Change the value of the first active entry.
    Update { name: String, value: Toggle },
    /// Deactivate or delete the first matching entry.
    Remove { name: String, mode: RemoveMode },
    /// Reactivate the first inactive entry.
    Restore { name: String },
}

impl Request {
    /// Validate a verb and its positional arguments.
    pub fn parse<S: AsRef<str>>(verb: &str, args: &[S]) -> Result<Self, TableError> {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();

        match (verb, args.as_slice()) {
            ("version", []) => Ok(Request::Version),
            ("create", []) => Ok(Request::create(None)),
            ("create", [path]) => Ok(Request::create(Some(PathBuf::from(*path)))),
            ("show", []) => Ok(Request::Show),
            ("append", [name]) => Request::append(name, None),
            ("append", [name, value]) => Request::append(name, Some(*value)),
            ("update", [name, value]) => Request::update(name, value),
            ("remove", [name]) => Request::remove(name, None),
            ("remove", [name, mode]) => Request::remove(name, Some(*mode)),
            ("restore", [name]) => Ok(Request::restore(name)),
            ("version" | "create" | "show" | "append" | "update" | "remove" | "restore", _) => {
                Err(TableError::InvalidArgument(format!(
                    "supplied arguments do not match correct use of '{}'",
                    verb
                )))
            }
            (other, _) => Err(TableError::InvalidArgument(format!(
                "{} not found in action list",
                other
            ))),
        }
    }

    pub fn create(dir: Option<PathBuf>) -> Self {
        Request::Create { dir }
    }

    /// `append <name> [value]`; a missing value means `true`.
    pub fn append(name: &str, value: Option<&str>) -> Result<Self, TableError> {
        let value = value.map(Toggle::parse).transpose()?.unwrap_or_default();
        Ok(Request::Append {
            name: name.to_string(),
            value,
        })
    }

    /// `update <name> <value>`
    pub fn update(name: &str, value: &str) -> Result<Self, TableError> {
        Ok(Request::Update {
            name: name.to_string(),
            value: Toggle::parse(value)?,
        })
    }

    /// `remove <name> [force]`
    pub fn remove(name: &str, mode: Option<&str>) -> Result<Self, TableError> {
        let mode = match mode {
            None => RemoveMode::Soft,
            Some(FORCE) => RemoveMode::Force,
            Some(other) => {
                return Err(TableError::InvalidArgument(format!(
                    "unrecognised argument {}. Only {} works.",
                    other, FORCE
                )))
            }
        };
        Ok(Request::Remove {
            name: name.to_string(),
            mode,
        })
    }

    pub fn restore(name: &str) -> Self {
        Request::Restore {
            name: name.to_string(),
        }
    }

    /// True for requests that rewrite the table.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Request::Version | Request::Show)
    }
}
