#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tlv8_reader::TlvReader;
use tlv8_tests::long_element;

#[derive(Debug, Arbitrary)]
struct Entry {
    tag: u8,
    content: Vec<u8>,
}

// Fuzz target: structured round-trip through the coalescing logic.
//
// Serializes arbitrary (tag, content) pairs the canonical way — content
// split into maximal 255-byte same-tag fragments — and asserts the reader
// reassembles each logical element exactly: same tag, summed length,
// concatenated payload. Adjacent same-tag entries are dropped from the
// input because the wire format cannot represent them as separate
// elements (that adjacency is precisely what coalescing merges).
fuzz_target!(|entries: Vec<Entry>| {
    let mut kept: Vec<&Entry> = Vec::new();
    for entry in &entries {
        match kept.last() {
            Some(last) if last.tag == entry.tag => {}
            _ => kept.push(entry),
        }
    }

    let wire: Vec<u8> = kept
        .iter()
        .flat_map(|entry| long_element(entry.tag, &entry.content))
        .collect();

    let mut reader = TlvReader::new(&wire);
    for entry in &kept {
        assert_eq!(reader.next().unwrap(), Some(entry.tag));
        assert_eq!(reader.length(), entry.content.len());
        assert_eq!(reader.dup_bytes().unwrap(), entry.content);
    }
    assert_eq!(reader.next().unwrap(), None);
});
