//! INI text format: parsing and serializing whole documents.

pub mod codec;

pub use codec::{parse_document, serialize_document};
