//! engine
//!
//! The command dispatcher: validate a request, run it against the table,
//! hand back an outcome.
//!
//! # Architecture
//!
//! ```text
//! verb + args -> Request (command) -> TableStore operation (exec) -> Outcome
//! ```
//!
//! 1. **Validate**: [`command::Request`] checks argument shape and values.
//!    Failures never reach the table.
//! 2. **Execute**: [`exec::execute`] performs exactly one store operation.
//!
//! Rendering the outcome is the CLI's job.
//!
//! # Concurrency
//!
//! One invocation runs one operation, synchronously. Separate processes
//! mutating the same table are not coordinated; the last writer wins.

pub mod command;
pub mod exec;

pub use command::Request;
pub use exec::{execute, Outcome};

use std::path::PathBuf;

use crate::core::table::TableStore;
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains settings resolved from CLI flags, environment, and config.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved table directory.
    pub table_dir: PathBuf,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (no confirmation messages).
    pub quiet: bool,
}

impl Context {
    /// Store for the configured table directory.
    pub fn store(&self) -> TableStore {
        TableStore::open(&self.table_dir)
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            table_dir: PathBuf::from(crate::core::config::DEFAULT_TABLE_DIR),
            debug: false,
            quiet: false,
        }
    }
}
