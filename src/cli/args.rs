//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--table-dir <dir>`: Use the table in this directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: No confirmation messages
//!
//! Values for `append`, `update`, and `remove` are taken as plain strings
//! here and validated by [`crate::engine::command::Request`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::table::TableError;
use crate::engine::command::Request;

/// envc - Toggle named control variables stored in a flat table file
#[derive(Parser, Debug)]
#[command(name = "envc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Show the table
    envc show

    # Append a control variable for VIRTUALENV
    envc append VIRTUALENV true

    # Update a control variable
    envc update VIRTUALENV false

    # Remove a control variable
    envc remove VIRTUALENV
    envc remove VIRTUALENV force

    # Restore (only the ones that have not been forced out)
    envc restore VIRTUALENV")]
pub struct Cli {
    /// Use the table in this directory (overrides ENVC_TABLE_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    pub table_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// No confirmation messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments without exiting on error.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Displays version of the tool and the table path
    Version,

    /// Creates the envc control table
    #[command(long_about = "Creates the envc control table.\n\n\
        Creates the directory if needed and an empty table file inside it. \
        Running create on an existing table wipes every entry.")]
    Create {
        /// Directory where the table should be created (defaults to the configured one)
        path: Option<PathBuf>,
    },

    /// Shows current control variable table
    Show {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Appends a control variable to the table
    Append {
        /// Control variable to add
        name: String,

        /// Initial value: true or false (default: true)
        value: Option<String>,
    },

    /// Updates the value of a control variable
    Update {
        /// Control variable to update
        name: String,

        /// New value: true or false
        value: String,
    },

    /// Removes a control variable from the table
    #[command(long_about = "Removes a control variable from the table.\n\n\
        By default the variable is commented out and keeps its value, so it can \
        be restored later. Pass `force` to delete it permanently.")]
    Remove {
        /// Control variable to remove
        name: String,

        /// `force` deletes the variable permanently
        #[arg(value_name = "force")]
        mode: Option<String>,
    },

    /// Restores a removed control variable
    Restore {
        /// Control variable to restore
        name: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Validate arguments into an engine request.
    ///
    /// Returns `None` for commands the engine does not handle.
    pub fn to_request(&self) -> Option<Result<Request, TableError>> {
        Some(match self {
            Command::Version => Ok(Request::Version),
            Command::Create { path } => Ok(Request::create(path.clone())),
            Command::Show { .. } => Ok(Request::Show),
            Command::Append { name, value } => Request::append(name, value.as_deref()),
            Command::Update { name, value } => Request::update(name, value),
            Command::Remove { name, mode } => Request::remove(name, mode.as_deref()),
            Command::Restore { name } => Ok(Request::restore(name)),
            Command::Completion { .. } => return None,
        })
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}
