//! core::table::store
//!
//! Load, mutate, and persist the control variable table.
//!
//! # Architecture
//!
//! Every operation is one scoped cycle against the backend:
//!
//! 1. Read the whole table text and decode it
//! 2. Apply one mutation to the in-memory [`Table`]
//! 3. Encode and write the whole text back
//!
//! Nothing is written unless step 2 succeeds, so a failed lookup or a
//! malformed table leaves the stored text exactly as it was.
//!
//! # Matching
//!
//! Mutations act on the first entry in file order accepted by their
//! [`Lookup`]:
//!
//! | operation | lookup |
//! |---|---|
//! | `update` | [`Lookup::Active`] |
//! | `soft_remove` / `hard_remove` | [`Lookup::Either`] |
//! | `restore` | [`Lookup::Inactive`] |
//!
//! `update` ignores inactive entries but `remove` accepts both states. This
//! asymmetry is long-standing behavior that scripts rely on.
//!
//! # Example
//!
//! ```
//! use envc::core::table::{MemoryBackend, RemoveMode, TableStore};
//!
//! let store = TableStore::with_backend(MemoryBackend::uninitialized());
//! store.create().unwrap();
//! store.append("VIRTUALENV", "true").unwrap();
//! store.remove("VIRTUALENV", RemoveMode::Soft).unwrap();
//!
//! let listing = store.list().unwrap();
//! assert!(listing.active.is_empty());
//! assert_eq!(listing.inactive[0].value, "true");
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::backend::{FileBackend, TableBackend};
use super::codec::{self, CodecError};
use super::{Entry, Listing, Lookup, Table};
use crate::core::types::{self, TypeError, VariableName};

/// Errors from table operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file does not exist. It is never created implicitly.
    #[error("table file not found at '{}'", .0.display())]
    NotFound(PathBuf),

    /// A stored line is malformed.
    #[error("failed to parse table '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// No entry matched the requested name and state.
    #[error("could not find {}control variable {name}", qualifier(.inactive_only))]
    VariableNotFound { name: String, inactive_only: bool },

    /// An argument was rejected before the table was touched.
    #[error("{0}")]
    InvalidArgument(String),

    /// Reading or writing the table failed.
    #[error("failed to access table '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn qualifier(inactive_only: &bool) -> &'static str {
    if *inactive_only {
        "inactive "
    } else {
        ""
    }
}

impl From<TypeError> for TableError {
    fn from(err: TypeError) -> Self {
        TableError::InvalidArgument(err.to_string())
    }
}

/// How `remove` disposes of the matched entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoveMode {
    /// Comment the entry out, keeping its value for `restore`.
    #[default]
    Soft,
    /// Delete the entry's line permanently.
    Force,
}

/// The table engine, bound to one backend.
#[derive(Debug)]
pub struct TableStore<B = FileBackend> {
    backend: B,
}

impl TableStore<FileBackend> {
    /// Store for the table file inside `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::with_backend(FileBackend::new(dir))
    }
}

impl<B: TableBackend> TableStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Where the table lives, for messages.
    pub fn location(&self) -> &Path {
        self.backend.location()
    }

    /// Read and decode the current table.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the table has not been created
    /// - `Parse` if any line is malformed
    pub fn load(&self) -> Result<Table, TableError> {
        let contents = self
            .backend
            .read()
            .map_err(|e| self.io_error(e))?
            .ok_or_else(|| TableError::NotFound(self.location().to_path_buf()))?;

        let table = codec::decode(&contents).map_err(|source| TableError::Parse {
            path: self.location().to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} entries from {}",
            table.len(),
            self.location().display()
        );
        Ok(table)
    }

    /// Create an empty table, creating the directory if needed.
    ///
    /// Calling this on an existing table wipes every entry.
    pub fn create(&self) -> Result<(), TableError> {
        self.backend.initialize().map_err(|e| self.io_error(e))?;
        log::debug!("initialized empty table at {}", self.location().display());
        Ok(())
    }

    /// Append a new active entry at the end of the table.
    ///
    /// Entries with the same name are not checked; duplicates are allowed.
    pub fn append(&self, name: &str, value: &str) -> Result<Entry, TableError> {
        let name = VariableName::new(name)?;
        types::validate_value(value)?;

        self.mutate(|table| {
            let entry = Entry::active(name, value);
            table.push(entry.clone());
            Ok(entry)
        })
    }

    /// Replace the value of the first active entry named `name`.
    pub fn update(&self, name: &str, value: &str) -> Result<Entry, TableError> {
        types::validate_value(value)?;

        self.mutate(|table| {
            let entry = table
                .first_mut(Lookup::Active(name))
                .ok_or_else(|| not_found(name, false))?;
            entry.value = value.to_string();
            Ok(entry.clone())
        })
    }

    /// Remove the first entry named `name` in either state.
    pub fn remove(&self, name: &str, mode: RemoveMode) -> Result<Entry, TableError> {
        match mode {
            RemoveMode::Soft => self.soft_remove(name),
            RemoveMode::Force => self.hard_remove(name),
        }
    }

    /// Deactivate the first entry named `name`, keeping its value.
    ///
    /// Already inactive entries match too and stay inactive.
    pub fn soft_remove(&self, name: &str) -> Result<Entry, TableError> {
        self.mutate(|table| {
            let entry = table
                .first_mut(Lookup::Either(name))
                .ok_or_else(|| not_found(name, false))?;
            entry.deactivate();
            Ok(entry.clone())
        })
    }

    /// Delete the first entry named `name` in either state.
    pub fn hard_remove(&self, name: &str) -> Result<Entry, TableError> {
        self.mutate(|table| {
            let index = table
                .position(Lookup::Either(name))
                .ok_or_else(|| not_found(name, false))?;
            Ok(table.remove(index))
        })
    }

    /// Reactivate the first inactive entry named `name`.
    ///
    /// Restoring a name that is only present as active is an error.
    pub fn restore(&self, name: &str) -> Result<Entry, TableError> {
        self.mutate(|table| {
            let entry = table
                .first_mut(Lookup::Inactive(name))
                .ok_or_else(|| not_found(name, true))?;
            entry.activate();
            Ok(entry.clone())
        })
    }

    /// Active and inactive entries, each in file order.
    pub fn list(&self) -> Result<Listing, TableError> {
        Ok(self.load()?.partition())
    }

    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Table) -> Result<T, TableError>,
    ) -> Result<T, TableError> {
        let mut table = self.load()?;
        let result = apply(&mut table)?;
        self.persist(&table)?;
        Ok(result)
    }

    fn persist(&self, table: &Table) -> Result<(), TableError> {
        self.backend
            .write(&codec::encode(table))
            .map_err(|e| self.io_error(e))?;
        log::debug!(
            "wrote {} entries to {}",
            table.len(),
            self.location().display()
        );
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> TableError {
        TableError::Io {
            path: self.location().to_path_buf(),
            source,
        }
    }
}

fn not_found(name: &str, inactive_only: bool) -> TableError {
    log::debug!("no match for '{}' (inactive only: {})", name, inactive_only);
    TableError::VariableNotFound {
        name: name.to_string(),
        inactive_only,
    }
}
