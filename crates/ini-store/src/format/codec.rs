//! Text codec for INI documents.
//!
//! Wire format:
//! ```text
//! [SectionName]
//! key1=value1
//! key2=value2
//!
//! [SectionName2]
//! key3=value3
//!
//! ```
//! Every section is followed by one blank line, the last one included.
//! There is no comment syntax, no quoting and no escaping.  Whitespace in
//! section names, keys and values is kept exactly as written.
//!
//! Parsing is permissive and never fails: a line that is neither a header nor
//! a `key=value` pair is skipped.

use std::fmt;

use tracing::trace;

use crate::domain::document::{Document, Entry, Section};

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses INI text into a [`Document`].
///
/// - `\n` and `\r\n` line endings are both accepted.
/// - Empty lines are skipped.
/// - `[name]` opens a new section.  Only the first `[` and the last `]` are
///   syntax; anything between them, including other brackets and spaces, is
///   the name.
/// - Any other line is split on its **first** `=`.  Lines without `=` are
///   skipped, as are entries that appear before the first header.
/// - Repeated headers and repeated keys are kept as separate sections and
///   entries.
///
/// # Examples
///
/// ```rust
/// use ini_store::format::parse_document;
///
/// let doc = parse_document("[Graphics]\nResolution=1920x1080\n\n");
/// assert_eq!(doc.value("Graphics", "Resolution"), Some("1920x1080"));
/// ```
pub fn parse_document(text: &str) -> Document {
    let mut doc = Document::new();

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            doc.push_section(Section::empty(name));
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            trace!("skipping line {}: no '=' and not a section header", index + 1);
            continue;
        };

        match doc.last_section_mut() {
            Some(section) => section.push(Entry::new(key, value)),
            None => trace!("skipping line {}: entry before first section header", index + 1),
        }
    }

    doc
}

/// Serializes a [`Document`] into INI text.
///
/// The output parses back into an equal document, and re-serializing that
/// gives the same bytes.  An empty document serializes to an empty string.
///
/// # Examples
///
/// ```rust
/// use ini_store::domain::{Document, Entry, Section};
/// use ini_store::format::serialize_document;
///
/// let doc = Document::from_sections(vec![Section::new(
///     "Graphics",
///     vec![Entry::new("VSync", "off")],
/// )]);
/// assert_eq!(serialize_document(&doc), "[Graphics]\nVSync=off\n\n");
/// ```
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::with_capacity(estimated_len(doc));
    for section in doc.sections() {
        write_section(&mut out, section);
    }
    out
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Returns the section name if `line` is a `[name]` header.
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

fn write_section(out: &mut String, section: &Section) {
    out.push('[');
    out.push_str(section.name());
    out.push_str("]\n");
    for entry in section.entries() {
        out.push_str(&entry.key);
        out.push('=');
        out.push_str(&entry.value);
        out.push('\n');
    }
    out.push('\n');
}

fn estimated_len(doc: &Document) -> usize {
    doc.sections()
        .iter()
        .map(|section| {
            // "[" + name + "]\n" + entries + "\n"
            section.name().len()
                + 4
                + section
                    .entries()
                    .iter()
                    .map(|e| e.key.len() + e.value.len() + 2)
                    .sum::<usize>()
        })
        .sum()
}

// ── Trait glue ────────────────────────────────────────────────────────────────

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_document(self))
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        parse_document(text)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
