#![no_main]

use libfuzzer_sys::fuzz_target;
use tlv8_reader::TlvReader;

const MAX_DEPTH: usize = 6;

// Fuzz target: recursive container descent over arbitrary bytes.
//
// Every element is opened as a container and its payload re-parsed as a
// nested stream, up to a fixed depth. Catches bugs in the parent/child
// cursor sharing: a child must never read past its parent's element, and
// closing a child must leave the parent positioned on the next element.
fn walk(reader: &mut TlvReader<'_>, depth: usize) {
    loop {
        match reader.next() {
            Ok(Some(_)) => {
                let length = reader.length();
                if depth < MAX_DEPTH {
                    let mut child = reader.open_container().unwrap();
                    walk(&mut child, depth + 1);
                    // An underrun inside leaves the parent framed; both
                    // outcomes must let the parent continue.
                    let _ = child.close();
                } else {
                    let dup = reader.dup_bytes().unwrap();
                    assert_eq!(dup.len(), length);
                }
            }
            Ok(None) | Err(_) => return,
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut reader = TlvReader::new(data);
    walk(&mut reader, 0);
});
