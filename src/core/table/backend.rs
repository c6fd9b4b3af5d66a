//! core::table::backend
//!
//! Storage for the table text.
//!
//! # Design
//!
//! The store never touches the filesystem directly. It asks a
//! [`TableBackend`] for the whole text, and hands back the whole text to
//! write. Two implementations exist:
//!
//! - [`FileBackend`]: the table file on disk, see [`crate::core::paths`]
//! - [`MemoryBackend`]: an in-process buffer for tests
//!
//! # Durability
//!
//! [`FileBackend::write`] writes a sibling temp file, syncs it, then renames
//! it over the table. A crash mid-write leaves either the old or the new
//! table, never a truncated one.
//!
//! There is no locking. Two processes mutating the same table race and the
//! last rename wins.

use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::paths::TablePaths;

/// Source and sink for the table text.
pub trait TableBackend {
    /// Human-readable location of the table, used in messages.
    fn location(&self) -> &Path;

    /// Read the whole table text.
    ///
    /// Returns `Ok(None)` if the table has not been created.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the whole table text.
    fn write(&self, contents: &str) -> io::Result<()>;

    /// Create an empty table, discarding any existing contents.
    fn initialize(&self) -> io::Result<()>;
}

/// Table file on disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    paths: TablePaths,
}

impl FileBackend {
    /// Backend for the table inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: TablePaths::new(dir),
        }
    }

    pub fn paths(&self) -> &TablePaths {
        &self.paths
    }
}

impl TableBackend for FileBackend {
    fn location(&self) -> &Path {
        self.paths.table_file()
    }

    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(self.paths.table_file()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let temp_path = self.paths.temp_file();

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&temp_path, self.paths.table_file()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        Ok(())
    }

    fn initialize(&self) -> io::Result<()> {
        fs::create_dir_all(self.paths.dir())?;
        fs::File::create(self.paths.table_file())?;
        Ok(())
    }
}

/// In-memory table for tests.
///
/// `None` contents means the table has not been created.
#[derive(Debug)]
pub struct MemoryBackend {
    label: PathBuf,
    contents: RefCell<Option<String>>,
}

impl MemoryBackend {
    /// A backend with no table yet.
    pub fn uninitialized() -> Self {
        Self {
            label: PathBuf::from(":memory:"),
            contents: RefCell::new(None),
        }
    }

    /// A backend holding `contents` as the table text.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            label: PathBuf::from(":memory:"),
            contents: RefCell::new(Some(contents.into())),
        }
    }

    /// Current table text, if created.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl TableBackend for MemoryBackend {
    fn location(&self) -> &Path {
        &self.label
    }

    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn initialize(&self) -> io::Result<()> {
        *self.contents.borrow_mut() = Some(String::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    mod file_backend {
        use super::*;

        #[test]
        fn read_missing_table_is_none() {
            let temp = TempDir::new().expect("create temp dir");
            let backend = FileBackend::new(temp.path());
            assert!(backend.read().expect("read").is_none());
        }

        #[test]
        fn initialize_creates_directory_and_empty_file() {
            let temp = TempDir::new().expect("create temp dir");
            let dir = temp.path().join("nested").join("envc");
            let backend = FileBackend::new(&dir);

            backend.initialize().expect("initialize");

            assert!(dir.is_dir());
            assert_eq!(backend.read().expect("read"), Some(String::new()));
        }

        #[test]
        fn initialize_truncates_existing_table() {
            let temp = TempDir::new().expect("create temp dir");
            let backend = FileBackend::new(temp.path());
            backend.initialize().expect("first initialize");
            backend.write("A=true\n").expect("write");

            backend.initialize().expect("second initialize");

            assert_eq!(backend.read().expect("read"), Some(String::new()));
        }

        #[test]
        fn write_replaces_contents_and_cleans_temp() {
            let temp = TempDir::new().expect("create temp dir");
            let backend = FileBackend::new(temp.path());
            backend.initialize().expect("initialize");

            backend.write("A=true\n").expect("first write");
            backend.write("B=false\n").expect("second write");

            assert_eq!(backend.read().expect("read"), Some("B=false\n".into()));
            assert!(!backend.paths().temp_file().exists());
        }

        #[test]
        fn location_is_table_file() {
            let temp = TempDir::new().expect("create temp dir");
            let backend = FileBackend::new(temp.path());
            assert_eq!(backend.location(), temp.path().join("000_envc_table"));
        }

        #[test]
        fn write_into_missing_directory_fails() {
            let temp = TempDir::new().expect("create temp dir");
            let backend = FileBackend::new(temp.path().join("absent"));
            assert!(backend.write("A=true\n").is_err());
        }
    }

    mod memory_backend {
        use super::*;

        #[test]
        fn lifecycle() {
            let backend = MemoryBackend::uninitialized();
            assert!(backend.read().unwrap().is_none());

            backend.initialize().unwrap();
            assert_eq!(backend.contents(), Some(String::new()));

            backend.write("A=true\n").unwrap();
            assert_eq!(backend.read().unwrap(), Some("A=true\n".into()));
        }
    }
}
