//! Property-based tests for the INI codec and store.
//!
//! Properties covered:
//! - Round trip: parsing serialized output gives back the same document, and
//!   re-serializing gives the same bytes.
//! - Write-then-read: a value written through the store reads back exactly.
//! - Update keeps position: rewriting an existing key does not reorder keys.
//! - New key appends: a fresh key lands at the end of its section.

use ini_store::{parse_document, serialize_document, Document, Entry, IniStore, Section};
use proptest::prelude::*;

// ============ Generators ============

/// Section names may contain brackets, `=` and spaces; only line breaks are
/// unrepresentable.
fn section_name_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 _.=\[\]-]{0,12}"
}

/// Keys cannot contain `=` and must not start with `[`, otherwise the line
/// could read back as a header.
fn key_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9_.-][A-Za-z0-9 _.-]{0,11}"
}

/// Values may contain anything but line breaks, including `=` and brackets.
fn value_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 _.=\[\]-]{0,16}"
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (key_strategy(), value_strategy()).prop_map(|(k, v)| Entry::new(k, v))
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec(
        (
            section_name_strategy(),
            prop::collection::vec(entry_strategy(), 0..6),
        )
            .prop_map(|(name, entries)| Section::new(name, entries)),
        0..6,
    )
    .prop_map(Document::from_sections)
}

/// Raw file text: arbitrary lines (junk included) joined by LF or CRLF.
fn file_text_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(r"[A-Za-z0-9 =\[\]]{0,10}", 0..20),
        any::<bool>(),
    )
        .prop_map(|(lines, crlf)| lines.join(if crlf { "\r\n" } else { "\n" }))
}

// ============ Property 1: Round trip ============

proptest! {
    #[test]
    fn prop_serialize_then_parse_is_identity(doc in document_strategy()) {
        let text = serialize_document(&doc);
        let reparsed = parse_document(&text);

        prop_assert_eq!(&reparsed, &doc);
        prop_assert_eq!(serialize_document(&reparsed), text);
    }

    #[test]
    fn prop_parsed_files_reserialize_identically(text in file_text_strategy()) {
        let first = serialize_document(&parse_document(&text));
        let second = serialize_document(&parse_document(&first));

        prop_assert_eq!(first, second);
    }
}

// ============ Properties 2-4: Store behaviour ============

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_write_then_read_returns_value(
        section in section_name_strategy(),
        key in key_strategy(),
        value in value_strategy(),
        existing in document_strategy(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = IniStore::open(dir.path().join("p.ini")).unwrap();
        std::fs::write(store.path(), serialize_document(&existing)).unwrap();

        store.write_value(&section, &key, &value).unwrap();

        prop_assert_eq!(store.read_value(&section, &key), value);
    }

    #[test]
    fn prop_update_keeps_key_order(
        keys in prop::collection::hash_set(key_strategy(), 1..8),
        pick in any::<prop::sample::Index>(),
        new_value in value_strategy(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = IniStore::open(dir.path().join("p.ini")).unwrap();
        let keys: Vec<String> = keys.into_iter().collect();
        for (i, key) in keys.iter().enumerate() {
            store.write_value("S", key, &i.to_string()).unwrap();
        }

        let target = pick.get(&keys);
        store.write_value("S", target, &new_value).unwrap();

        let entries = store.read_section("S").unwrap().expect("section has entries");
        let order: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
        prop_assert_eq!(order, expected);
        prop_assert_eq!(store.read_value("S", target), new_value);
    }

    #[test]
    fn prop_new_key_appends_at_end(
        keys in prop::collection::hash_set(key_strategy(), 1..8),
        value in value_strategy(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = IniStore::open(dir.path().join("p.ini")).unwrap();
        let mut keys: Vec<String> = keys.into_iter().collect();
        let fresh = keys.pop().expect("at least one key");
        for key in &keys {
            store.write_value("S", key, "x").unwrap();
        }

        store.write_value("S", &fresh, &value).unwrap();

        let entries = store.read_section("S").unwrap().expect("section has entries");
        prop_assert_eq!(entries.len(), keys.len() + 1);
        let expected = Entry::new(fresh, value);
        prop_assert_eq!(entries.last(), Some(&expected));
        for (entry, key) in entries.iter().zip(&keys) {
            prop_assert_eq!(&entry.key, key);
        }
    }
}
