//! envc - Toggle named control variables from the shell
//!
//! envc keeps a tiny flat-file table of named control variables. Each
//! variable has a string value and is either active or inactive
//! (commented out). Shell scripts read the table to decide which behaviors
//! to switch on.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Validates requests and runs them against the table
//! - [`core`] - Table model, file codec, storage, and configuration
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! envc maintains the following invariants:
//!
//! 1. Every non-empty line of the table file is exactly one entry
//! 2. File order is the only order; duplicates resolve to the first match
//! 3. Deactivating an entry never discards its value
//! 4. A failed operation leaves the table file untouched

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;

/// Version string printed by `envc version`.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
