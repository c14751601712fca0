//! Storage: the file-backed INI store.
//!
//! This module is the only place that touches the file system.  It binds a
//! path to the codec in [`crate::format`] and exposes section- and
//! value-level operations on top of the pure model in [`crate::domain`].
//!
//! # Why reload on every call? (for beginners)
//!
//! The store never caches a parsed document between calls.  Each operation
//! reads the whole file, works on a fresh in-memory [`crate::Document`], and
//! (for writes) overwrites the whole file before returning.  The file on disk
//! is therefore always the single source of truth: edits made by another
//! program or by hand between two calls are picked up by the next one, and
//! there is no cache that can silently drift out of date.  The cost is one
//! full read (and possibly one full write) per call, which is negligible for
//! configuration-sized files.

pub mod store;

pub use store::{IniStore, StoreError};
