//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments into an engine request
//! 2. Calls the engine to execute the request
//! 3. Formats and displays the outcome
//!
//! Handlers do NOT touch the table file directly.

mod completion;
mod show;

pub use completion::completion;
pub use show::render_listing;

use crate::cli::args::Command;
use crate::core::table::{RemoveMode, TableError};
use crate::engine::{self, Context, Outcome};
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Completion { shell } => completion::completion(shell),
        command => {
            let json = matches!(command, Command::Show { json: true });
            let Some(request) = command.to_request() else {
                return Ok(());
            };
            let outcome = match engine::execute(request?, &ctx.store()) {
                Err(err @ TableError::NotFound(_)) => {
                    return Err(anyhow::Error::new(err)
                        .context("envc table is not created (run 'envc create' first)"))
                }
                result => result?,
            };
            report(&outcome, ctx, json)
        }
    }
}

/// Print the result of a table command.
fn report(outcome: &Outcome, ctx: &Context, json: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    match outcome {
        Outcome::Version {
            version,
            table_file,
        } => println!("{} {}", version, table_file.display()),
        Outcome::Created { table_file } => output::success(
            format!("Created control table at {}", table_file.display()),
            verbosity,
        ),
        Outcome::Listing(listing) => show::render_listing(listing, json)?,
        Outcome::Appended(entry) => output::success(
            format!("Appended {}={}", entry.name, entry.value),
            verbosity,
        ),
        Outcome::Updated(entry) => output::success(
            format!("Updated {}={}", entry.name, entry.value),
            verbosity,
        ),
        Outcome::Removed {
            entry,
            mode: RemoveMode::Soft,
        } => output::success(format!("Deactivated {}", entry.name), verbosity),
        Outcome::Removed {
            entry,
            mode: RemoveMode::Force,
        } => output::success(format!("Deleted {}", entry.name), verbosity),
        Outcome::Restored(entry) => output::success(
            format!("Restored {}={}", entry.name, entry.value),
            verbosity,
        ),
    }
    Ok(())
}
