//! cli
//!
//! Command-line interface layer for envc.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration into an [`engine::Context`]
//! - Delegate to command handlers
//! - Does NOT read or write the table directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`] for execution. Every table change flows through the
//! engine's validated requests.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::engine;
use crate::ui::output;
use anyhow::Result;

/// Run the CLI application with already parsed arguments.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    let loaded = Config::load()?;

    let ctx = engine::Context {
        table_dir: loaded.config.table_dir(cli.table_dir.as_deref()),
        debug: cli.debug,
        quiet: cli.quiet || loaded.config.quiet(),
    };

    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity(),
        );
    }

    log::debug!("table directory: {}", ctx.table_dir.display());

    commands::dispatch(cli.command, &ctx)
}
