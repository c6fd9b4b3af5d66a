//! core::paths
//!
//! Centralized path routing for the table file.
//!
//! # Storage Layout
//!
//! Everything lives directly in the configured table directory:
//! - `000_envc_table` - The table itself
//! - `000_envc_table.tmp` - Scratch file for atomic rewrites (transient)
//!
//! No code outside this module should join the table file name onto a
//! directory.
//!
//! # Example
//!
//! ```
//! use envc::core::paths::TablePaths;
//! use std::path::PathBuf;
//!
//! let paths = TablePaths::new("/tmp");
//! assert_eq!(paths.table_file(), PathBuf::from("/tmp/000_envc_table"));
//! ```

use std::path::{Path, PathBuf};

/// Fixed file name of the table inside its directory.
pub const TABLE_FILE_NAME: &str = "000_envc_table";

/// Paths derived from one table directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    dir: PathBuf,
    table_file: PathBuf,
    temp_file: PathBuf,
}

impl TablePaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let table_file = dir.join(TABLE_FILE_NAME);
        let temp_file = table_file.with_extension("tmp");
        Self {
            dir,
            table_file,
            temp_file,
        }
    }

    /// The configured table directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/000_envc_table`
    pub fn table_file(&self) -> &Path {
        &self.table_file
    }

    /// `<dir>/000_envc_table.tmp`
    pub fn temp_file(&self) -> &Path {
        &self.temp_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_file_is_in_dir() {
        let paths = TablePaths::new("/var/envc");
        assert_eq!(paths.dir(), Path::new("/var/envc"));
        assert_eq!(paths.table_file(), Path::new("/var/envc/000_envc_table"));
    }

    #[test]
    fn temp_file_is_sibling() {
        let paths = TablePaths::new("/var/envc");
        assert_eq!(paths.temp_file(), Path::new("/var/envc/000_envc_table.tmp"));
        assert_eq!(paths.temp_file().parent(), Some(paths.dir()));
    }
}
