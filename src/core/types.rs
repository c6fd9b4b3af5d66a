//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`VariableName`] - Validated control variable name
//! - [`Toggle`] - The literal `true` / `false` value accepted from the command line
//!
//! # Validation
//!
//! These types enforce validity at construction time. A name that could not
//! be written to the table file and read back as the same entry cannot be
//! represented.
//!
//! # Examples
//!
//! ```
//! use envc::core::types::{Toggle, VariableName};
//!
//! let name = VariableName::new("VIRTUALENV").unwrap();
//! assert_eq!(name.as_str(), "VIRTUALENV");
//!
//! assert_eq!(Toggle::parse("false").unwrap(), Toggle::False);
//! assert!(Toggle::parse("yes").is_err());
//! assert!(VariableName::new("A=B").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::table::codec::{COMMENT_MARKER, SEPARATOR};

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid control variable name: {0}")]
    InvalidName(String),

    #[error("invalid control variable value: {0}")]
    InvalidValue(String),

    #[error("{0} is not recognized as a value. Only accepts true or false")]
    InvalidToggle(String),
}

/// A validated control variable name.
///
/// Names must survive a trip through the table file unchanged:
/// - Cannot be empty
/// - Cannot contain the `=` separator or a line break
/// - Cannot start with whitespace (lines are trimmed on decode)
/// - Cannot start with the comment marker `# ` (it would read back as inactive)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariableName(String);

impl VariableName {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidName` if the name cannot be stored.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidName("name cannot be empty".into()));
        }
        if name.contains(SEPARATOR) {
            return Err(TypeError::InvalidName(format!(
                "'{}' cannot contain '{}'",
                name, SEPARATOR
            )));
        }
        if name.contains(['\n', '\r']) {
            return Err(TypeError::InvalidName(
                "name cannot contain a line break".into(),
            ));
        }
        if name.starts_with(char::is_whitespace) {
            return Err(TypeError::InvalidName(format!(
                "'{}' cannot start with whitespace",
                name
            )));
        }
        if name.starts_with(COMMENT_MARKER) {
            return Err(TypeError::InvalidName(format!(
                "'{}' cannot start with the comment marker '{}'",
                name, COMMENT_MARKER
            )));
        }
        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VariableName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VariableName> for String {
    fn from(name: VariableName) -> Self {
        name.0
    }
}

/// Check that a value can be stored next to a name on one table line.
///
/// # Errors
///
/// Returns `TypeError::InvalidValue` if the value contains the separator or
/// a line break, or has surrounding whitespace that decoding would drop.
pub fn validate_value(value: &str) -> Result<(), TypeError> {
    if value.contains(SEPARATOR) {
        return Err(TypeError::InvalidValue(format!(
            "'{}' cannot contain '{}'",
            value, SEPARATOR
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(TypeError::InvalidValue(
            "value cannot contain a line break".into(),
        ));
    }
    if value.trim() != value {
        return Err(TypeError::InvalidValue(format!(
            "'{}' cannot have surrounding whitespace",
            value
        )));
    }
    Ok(())
}

/// The only values the command line accepts for a control variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    True,
    False,
}

impl Toggle {
    /// Parse the literal `true` or `false`. Nothing else is accepted, not
    /// even a different case.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        match raw {
            "true" => Ok(Toggle::True),
            "false" => Ok(Toggle::False),
            other => Err(TypeError::InvalidToggle(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Toggle::True => "true",
            Toggle::False => "false",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
