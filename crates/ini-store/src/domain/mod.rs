//! Domain model for INI documents.
//!
//! Pure data and the rules for querying and mutating it.  Nothing in here
//! touches the file system or knows the text format; see [`crate::format`]
//! for parsing and serializing and [`crate::storage`] for the file-backed
//! store.

/// Ordered sections of ordered key/value entries.
///
/// See [`document::Document`] for the main type.
pub mod document;

pub use document::{Document, Entry, Section};
