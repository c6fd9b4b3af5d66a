//! core::table::codec
//!
//! Text format of the table file.
//!
//! # Format
//!
//! One entry per line, no header:
//!
//! ```text
//! VIRTUALENV=true
//! # DOCKER=false
//! ```
//!
//! An active entry is `name=value`. An inactive entry is the same line
//! prefixed with the comment marker `# `. Empty lines are ignored on decode
//! and never emitted on encode.
//!
//! This module is the only place that knows about the comment marker; the
//! rest of the crate sees [`EntryState`].

use thiserror::Error;

use super::{Entry, EntryState, Table};

/// Separator between name and value.
pub const SEPARATOR: char = '=';

/// Prefix that marks an entry as inactive.
pub const COMMENT_MARKER: &str = "# ";

/// Errors from decoding table text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A line did not split into exactly two fields on the separator.
    #[error("statement on line {line} does not match structure: '{content}'")]
    Malformed { line: usize, content: String },
}

/// Parse table text into entries, in line order.
///
/// # Errors
///
/// Returns `CodecError::Malformed` for the first non-empty line that does
/// not contain exactly one `=`.
pub fn decode(input: &str) -> Result<Table, CodecError> {
    let mut table = Table::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        table.push(decode_line(line).ok_or_else(|| CodecError::Malformed {
            line: index + 1,
            content: raw.to_string(),
        })?);
    }

    Ok(table)
}

fn decode_line(line: &str) -> Option<Entry> {
    let mut fields = line.split(SEPARATOR);
    let (lhs, value) = match (fields.next(), fields.next(), fields.next()) {
        (Some(lhs), Some(value), None) => (lhs, value),
        _ => return None,
    };

    Some(match lhs.strip_prefix(COMMENT_MARKER) {
        Some(name) => Entry::inactive(name, value),
        None => Entry::active(lhs, value),
    })
}

/// Serialize entries back to table text, one `\n`-terminated line each.
pub fn encode(table: &Table) -> String {
    let mut out = String::new();
    for entry in table {
        encode_entry(entry, &mut out);
    }
    out
}

fn encode_entry(entry: &Entry, out: &mut String) {
    if entry.state == EntryState::Inactive {
        out.push_str(COMMENT_MARKER);
    }
    out.push_str(&entry.name);
    out.push(SEPARATOR);
    out.push_str(&entry.value);
    out.push('\n');
}
