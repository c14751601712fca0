//! # ini-store
//!
//! Read and write INI-style configuration files: named sections, each holding
//! ordered `key=value` string pairs.
//!
//! ```text
//! [Graphics]
//! Resolution=1920x1080
//! Fullscreen=true
//!
//! ```
//!
//! # Architecture overview
//!
//! - **`domain`** – The in-memory model: [`Document`] → [`Section`] →
//!   [`Entry`].  Pure data plus the rules for lookups and updates (first
//!   occurrence wins, updates keep position, new things are appended).
//!
//! - **`format`** – The text codec.  [`parse_document`] is permissive and
//!   never fails; [`serialize_document`] writes the canonical layout with a
//!   blank line after every section.
//!
//! - **`storage`** – [`IniStore`], the file-backed handle.  Every call reloads
//!   the file, so the file on disk is always the source of truth.
//!
//! Values are plain strings.  There are no comments, no quoting, no escapes
//! and no type conversion; whitespace is kept as written.
//!
//! # Example
//!
//! ```rust,no_run
//! use ini_store::{Entry, IniStore};
//!
//! let store = IniStore::open("settings.ini")?;
//! store.write_value("Graphics", "Resolution", "1920x1080")?;
//! store.write_value("Graphics", "Fullscreen", "true")?;
//! assert_eq!(store.read_value("Graphics", "Resolution"), "1920x1080");
//!
//! store.write_section("Graphics", [Entry::new("VSync", "off")])?;
//! assert_eq!(store.read_value("Graphics", "Resolution"), "");
//! # Ok::<(), ini_store::StoreError>(())
//! ```

pub mod domain;
pub mod format;
pub mod storage;

pub use domain::document::{Document, Entry, Section};
pub use format::codec::{parse_document, serialize_document};
pub use storage::store::{IniStore, StoreError};
