//! core::table
//!
//! The control variable table: entry model, file codec, storage backends,
//! and the store that applies mutations.
//!
//! # Model
//!
//! A [`Table`] is an ordered sequence of [`Entry`] values in file order.
//! Names are not unique. Every lookup is a linear scan that stops at the
//! first entry accepted by a [`Lookup`], so duplicates resolve by file
//! position.
//!
//! # Modules
//!
//! - [`codec`] - Text format: `name=value` / `# name=value` lines
//! - [`backend`] - Where the text lives (file on disk, memory buffer)
//! - [`store`] - Load, mutate, persist

pub mod backend;
pub mod codec;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, TableBackend};
pub use codec::CodecError;
pub use store::{RemoveMode, TableError, TableStore};

use std::borrow::Cow;

use serde::Serialize;

/// Whether an entry is in effect or soft-removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    Active,
    Inactive,
}

/// One control variable.
///
/// The name never carries the comment marker. Inactive entries keep their
/// value so they can be restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub value: String,
    pub state: EntryState,
}

impl Entry {
    pub fn active(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            state: EntryState::Active,
        }
    }

    pub fn inactive(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            state: EntryState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == EntryState::Active
    }

    /// The name as it appears left of the separator in the file.
    ///
    /// Inactive entries carry the comment marker: `# NAME`.
    pub fn serialized_name(&self) -> Cow<'_, str> {
        match self.state {
            EntryState::Active => Cow::Borrowed(&self.name),
            EntryState::Inactive => {
                Cow::Owned(format!("{}{}", codec::COMMENT_MARKER, self.name))
            }
        }
    }

    pub fn deactivate(&mut self) {
        self.state = EntryState::Inactive;
    }

    pub fn activate(&mut self) {
        self.state = EntryState::Active;
    }
}

/// Match predicate used to pick the first entry for a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Serialized name equals the target. Only active entries can match,
    /// since an inactive entry's serialized name carries the marker.
    Active(&'a str),

    /// Serialized name or marker-stripped name equals the target.
    /// Matches entries in either state.
    Either(&'a str),

    /// Serialized name equals `# <target>`. Only inactive entries match.
    Inactive(&'a str),
}

impl Lookup<'_> {
    pub fn matches(&self, entry: &Entry) -> bool {
        match *self {
            Lookup::Active(target) => entry.serialized_name() == target,
            Lookup::Either(target) => entry.serialized_name() == target || entry.name == target,
            Lookup::Inactive(target) => !entry.is_active() && entry.name == target,
        }
    }
}

/// Ordered sequence of entries, mirroring the file's line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append at the end of the sequence. Existing entries with the same
    /// name are left alone.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Index of the first entry in file order accepted by `lookup`.
    pub fn position(&self, lookup: Lookup<'_>) -> Option<usize> {
        self.entries.iter().position(|e| lookup.matches(e))
    }

    /// First entry in file order accepted by `lookup`, mutably.
    pub fn first_mut(&mut self, lookup: Lookup<'_>) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| lookup.matches(e))
    }

    /// Remove and return the entry at `index`, shifting later entries up.
    pub fn remove(&mut self, index: usize) -> Entry {
        self.entries.remove(index)
    }

    /// Split into active and inactive entries, each in file order.
    pub fn partition(&self) -> Listing {
        let (active, inactive): (Vec<Entry>, Vec<Entry>) =
            self.entries.iter().cloned().partition(Entry::is_active);
        Listing { active, inactive }
    }
}

impl FromIterator<Entry> for Table {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The table split for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub active: Vec<Entry>,
    pub inactive: Vec<Entry>,
}

impl Listing {
    /// True when the table has no entries in either state.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }
}
