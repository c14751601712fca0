//! File-backed INI store.
//!
//! [`IniStore`] owns nothing but a path.  Every operation follows the same
//! cycle:
//!
//! ```text
//! read file ─▶ parse ─▶ query / mutate ─▶ serialize ─▶ overwrite file
//!                                         (writes only)
//! ```
//!
//! File handles are opened and closed inside each call, so nothing is held
//! open between calls and every exit path (including errors) releases them.
//!
//! There is no locking.  Two writers racing on the same path each overwrite
//! the whole file; the last one wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::document::{Document, Entry};
use crate::format::codec::{parse_document, serialize_document};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be created, read or written.
    #[error("I/O error accessing INI file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// The path of the file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Handle on an INI file.
///
/// # Examples
///
/// ```rust,no_run
/// use ini_store::IniStore;
///
/// let store = IniStore::open("settings.ini")?;
/// store.write_value("Graphics", "Resolution", "1920x1080")?;
/// assert_eq!(store.read_value("Graphics", "Resolution"), "1920x1080");
/// # Ok::<(), ini_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IniStore {
    path: PathBuf,
}

impl IniStore {
    /// Opens the INI file at `path`, creating an empty one if nothing exists
    /// there yet.
    ///
    /// An existing file is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file is missing and cannot be
    /// created, for example because its parent directory does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => info!("created empty INI file at {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(source) => return Err(StoreError::Io { path, source }),
        }

        Ok(Self { path })
    }

    /// The path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole file.
    ///
    /// This is the reload boundary: every other operation starts here, and
    /// the returned [`Document`] is a snapshot that is not kept in sync with
    /// the file afterwards.  Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD rather than failing the load.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read.
    pub fn load(&self) -> Result<Document, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        let doc = parse_document(&String::from_utf8_lossy(&bytes));
        debug!(
            "loaded {} section(s) from {}",
            doc.sections().len(),
            self.path.display()
        );
        Ok(doc)
    }

    /// Returns the value of `key` in `section`, or an empty string.
    ///
    /// The empty string covers a missing section, a missing key and a file
    /// that cannot be read, so a key that is present with an empty value looks
    /// exactly like one that is absent.  Use [`IniStore::try_read_value`] when
    /// the difference matters.
    pub fn read_value(&self, section: &str, key: &str) -> String {
        match self.try_read_value(section, key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("read_value [{section}] {key}: {e}");
                String::new()
            }
        }
    }

    /// Returns the value of `key` in `section`, or `None` when either is
    /// missing.  The first matching section and the first matching key win.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read.
    pub fn try_read_value(&self, section: &str, key: &str) -> Result<Option<String>, StoreError> {
        let doc = self.load()?;
        Ok(doc.value(section, key).map(str::to_owned))
    }

    /// Sets `key` to `value` in `section` and rewrites the file.
    ///
    /// An existing key keeps its position, a new key goes to the end of its
    /// section, and a new section goes to the end of the file.  The file is
    /// rewritten even when the value did not change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or written.
    pub fn write_value(&self, section: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let mut doc = self.load()?;
        doc.set_value(section, key, value);
        self.persist(&doc)
    }

    /// Returns the entries of `section` in file order.
    ///
    /// `Ok(None)` means the section is absent **or** present with no entries;
    /// the two cases are deliberately reported the same way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read.
    pub fn read_section(&self, section: &str) -> Result<Option<Vec<Entry>>, StoreError> {
        let doc = self.load()?;
        Ok(doc
            .section(section)
            .filter(|s| !s.is_empty())
            .map(|s| s.entries().to_vec()))
    }

    /// Replaces every entry of `section` with `entries` and rewrites the file.
    ///
    /// Keys not in `entries` are dropped.  An existing section stays where it
    /// is in the file; a new one is appended at the end.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or written.
    pub fn write_section<I, E>(&self, section: &str, entries: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        let mut doc = self.load()?;
        doc.replace_section(section, entries.into_iter().map(Into::into).collect());
        self.persist(&doc)
    }

    /// Returns `true` if no file exists at the path or the file has zero
    /// bytes.  The file is not parsed.
    pub fn is_empty(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) => e.kind() == io::ErrorKind::NotFound,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    /// Serializes `doc` and overwrites the file with it in a single write.
    fn persist(&self, doc: &Document) -> Result<(), StoreError> {
        let content = serialize_document(doc);
        fs::write(&self.path, &content).map_err(|source| self.io_error(source))?;
        debug!("wrote {} byte(s) to {}", content.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
