//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Confirmation messages go to stdout, problems to stderr. Listings are
//! written to any `io::Write` so they can be checked in tests.

use std::fmt::Display;
use std::io::{self, Write};

use crate::core::table::{Entry, Listing};

/// Indentation in front of each listed entry.
pub const INDENT: &str = "  ";

/// Header of the active section in `show`.
pub const ACTIVE_HEADER: &str = "Active Control Variables";

/// Header of the inactive section in `show`.
pub const INACTIVE_HEADER: &str = "Inactive Control Variables";

/// Printed by `show` for a table with no entries.
pub const EMPTY_TABLE: &str = "Empty table.";

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Format one entry as a listing line: name and value after the indent.
pub fn format_entry(entry: &Entry) -> String {
    format!("{}{} {}", INDENT, entry.name, entry.value)
}

/// Write the two-section listing printed by `show`.
///
/// An empty listing prints only [`EMPTY_TABLE`].
pub fn write_listing(listing: &Listing, out: &mut impl Write) -> io::Result<()> {
    if listing.is_empty() {
        return writeln!(out, "{}", EMPTY_TABLE);
    }

    writeln!(out, "{}", ACTIVE_HEADER)?;
    for entry in &listing.active {
        writeln!(out, "{}", format_entry(entry))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", INACTIVE_HEADER)?;
    for entry in &listing.inactive {
        writeln!(out, "{}", format_entry(entry))?;
    }
    Ok(())
}
