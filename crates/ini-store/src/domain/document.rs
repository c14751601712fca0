//! In-memory INI document model.
//!
//! A [`Document`] is an ordered list of [`Section`]s, and each section is an
//! ordered list of [`Entry`] key/value pairs.  Order is significant
//! everywhere: it is the order the file is written back in.
//!
//! # Duplicates
//!
//! Parsing keeps whatever the file contains, so a document may hold two
//! sections with the same name or a section may hold two entries with the
//! same key.  Every lookup and every in-place update resolves to the **first**
//! occurrence, reading top to bottom.  Later duplicates are carried along
//! untouched and written back where they were.

use serde::{Deserialize, Serialize};

// ── Entry ─────────────────────────────────────────────────────────────────────

/// A single `key=value` line inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Everything before the first `=` on the line, untrimmed.
    pub key: String,
    /// Everything after the first `=`, untrimmed.  May itself contain `=`.
    pub value: String,
}

impl Entry {
    /// Creates an entry from anything convertible into owned strings.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for Entry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

// ── Section ───────────────────────────────────────────────────────────────────

/// A named, ordered group of entries introduced by a `[name]` header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Creates a section with the given entries, in the given order.
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Creates a section with no entries.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consumes the section and returns its entries.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of the first entry whose key matches `key` exactly.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Sets `key` to `value`.
    ///
    /// If an entry with this key already exists its value is overwritten and
    /// it keeps its position.  Otherwise a new entry is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Entry { key, value }),
        }
    }

    /// Appends an entry without checking for an existing key.
    ///
    /// This is what the parser uses; it is how duplicate keys survive a load.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replaces every entry in the section.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }
}

// ── Document ──────────────────────────────────────────────────────────────────

/// The complete in-memory representation of an INI file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Creates a document with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from already-built sections, keeping their order.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns `true` when the document has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the first section named `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Mutable counterpart of [`Document::section`].
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.name == name)
    }

    /// Looks up `key` inside `section`.
    ///
    /// Returns `None` if either the section or the key is missing.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Sets `key` to `value` inside `section`.
    ///
    /// An existing key is updated in place.  A new key is appended to the end
    /// of its section.  A missing section is appended to the end of the
    /// document holding just this one entry.
    pub fn set_value(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        match self.section_mut(section) {
            Some(existing) => existing.set(key, value),
            None => self
                .sections
                .push(Section::new(section, vec![Entry::new(key, value)])),
        }
    }

    /// Replaces the whole entry list of `name`.
    ///
    /// This is a full replace, not a merge: keys not present in `entries` are
    /// dropped.  An existing section keeps its position in the document; a
    /// missing one is appended at the end.
    pub fn replace_section(&mut self, name: &str, entries: Vec<Entry>) {
        match self.section_mut(name) {
            Some(existing) => existing.replace_entries(entries),
            None => self.sections.push(Section::new(name, entries)),
        }
    }

    /// Appends a section without checking for an existing name.
    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Mutable access to the most recently appended section.
    pub(crate) fn last_section_mut(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
