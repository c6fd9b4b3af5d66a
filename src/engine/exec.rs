//! engine::exec
//!
//! Runs one validated [`Request`] against one table store.
//!
//! # Contract
//!
//! - Exactly one store operation per request
//! - `Create` with an explicit directory targets that directory, not the
//!   configured one; later invocations still use the configured directory
//! - Nothing is printed here; the caller renders the returned [`Outcome`]
//!
//! # Example
//!
//! ```
//! use envc::core::table::{MemoryBackend, TableStore};
//! use envc::engine::command::Request;
//! use envc::engine::exec::{execute, Outcome};
//!
//! let store = TableStore::with_backend(MemoryBackend::uninitialized());
//! execute(Request::create(None), &store).unwrap();
//! execute(Request::append("X", None).unwrap(), &store).unwrap();
//!
//! match execute(Request::Show, &store).unwrap() {
//!     Outcome::Listing(listing) => assert_eq!(listing.active.len(), 1),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

use std::path::PathBuf;

use super::command::Request;
use crate::core::table::{Entry, Listing, RemoveMode, TableBackend, TableError, TableStore};
use crate::VERSION;

/// What a request did, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Version {
        version: &'static str,
        table_file: PathBuf,
    },
    Created {
        table_file: PathBuf,
    },
    Listing(Listing),
    Appended(Entry),
    Updated(Entry),
    Removed {
        entry: Entry,
        mode: RemoveMode,
    },
    Restored(Entry),
}

/// Execute `request` against `store`.
///
/// # Errors
///
/// Propagates the store's `TableError` unchanged.
pub fn execute<B: TableBackend>(
    request: Request,
    store: &TableStore<B>,
) -> Result<Outcome, TableError> {
    log::debug!(
        "executing {:?} against {} (mutation: {})",
        request,
        store.location().display(),
        request.is_mutation()
    );

    match request {
        Request::Version => Ok(Outcome::Version {
            version: VERSION,
            table_file: store.location().to_path_buf(),
        }),
        Request::Create { dir: Some(dir) } => {
            let target = TableStore::open(dir);
            target.create()?;
            Ok(Outcome::Created {
                table_file: target.location().to_path_buf(),
            })
        }
        Request::Create { dir: None } => {
            store.create()?;
            Ok(Outcome::Created {
                table_file: store.location().to_path_buf(),
            })
        }
        Request::Show => store.list().map(Outcome::Listing),
        Request::Append { name, value } => store
            .append(&name, value.as_str())
            .map(Outcome::Appended),
        Request::Update { name, value } => store
            .update(&name, value.as_str())
            .map(Outcome::Updated),
        Request::Remove { name, mode } => store
            .remove(&name, mode)
            .map(|entry| Outcome::Removed { entry, mode }),
        Request::Restore { name } => store.restore(&name).map(Outcome::Restored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::MemoryBackend;
    use crate::core::types::Toggle;
    use tempfile::TempDir;

    fn store_with(contents: &str) -> TableStore<MemoryBackend> {
        TableStore::with_backend(MemoryBackend::with_contents(contents))
    }

    #[test]
    fn version_reports_location() {
        let store = store_with("");
        let outcome = execute(Request::Version, &store).unwrap();
        assert_eq!(
            outcome,
            Outcome::Version {
                version: VERSION,
                table_file: PathBuf::from(":memory:"),
            }
        );
    }

    #[test]
    fn version_does_not_need_a_table() {
        let store = TableStore::with_backend(MemoryBackend::uninitialized());
        assert!(execute(Request::Version, &store).is_ok());
    }

    #[test]
    fn create_in_explicit_directory_leaves_configured_table_alone() {
        let temp = TempDir::new().expect("create temp dir");
        let dir = temp.path().join("elsewhere");
        let store = store_with("A=true\n");

        let outcome = execute(Request::create(Some(dir.clone())), &store).unwrap();

        assert_eq!(
            outcome,
            Outcome::Created {
                table_file: dir.join("000_envc_table"),
            }
        );
        assert!(dir.join("000_envc_table").exists());
        assert_eq!(store.backend().contents(), Some("A=true\n".into()));
    }

    #[test]
    fn create_in_configured_directory() {
        let store = TableStore::with_backend(MemoryBackend::uninitialized());
        execute(Request::create(None), &store).unwrap();
        assert_eq!(store.backend().contents(), Some(String::new()));
    }

    #[test]
    fn append_then_update() {
        let store = store_with("");
        execute(
            Request::Append {
                name: "X".into(),
                value: Toggle::True,
            },
            &store,
        )
        .unwrap();
        let outcome = execute(
            Request::Update {
                name: "X".into(),
                value: Toggle::False,
            },
            &store,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Updated(Entry::active("X", "false")));
    }

    #[test]
    fn remove_reports_mode() {
        let store = store_with("X=true\n");
        let outcome = execute(
            Request::Remove {
                name: "X".into(),
                mode: RemoveMode::Force,
            },
            &store,
        )
        .unwrap();
        assert_eq!(
            outcome,
            Outcome::Removed {
                entry: Entry::active("X", "true"),
                mode: RemoveMode::Force,
            }
        );
        assert_eq!(store.backend().contents(), Some(String::new()));
    }

    #[test]
    fn restore_missing_is_variable_not_found() {
        let store = store_with("X=true\n");
        assert!(matches!(
            execute(Request::restore("X"), &store),
            Err(TableError::VariableNotFound { .. })
        ));
    }

    #[test]
    fn show_on_missing_table_is_not_found() {
        let store = TableStore::with_backend(MemoryBackend::uninitialized());
        assert!(matches!(
            execute(Request::Show, &store),
            Err(TableError::NotFound(_))
        ));
    }
}
