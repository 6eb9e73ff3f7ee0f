#![no_main]

use libfuzzer_sys::fuzz_target;
use tlv8_reader::{ReadError, TlvReader};

// Fuzz target: walk an arbitrary byte stream with every accessor.
//
// Catches bugs in:
// - Element framing and same-tag coalescing
// - Fragment-crossing payload reads
// - Mark/rewind bookkeeping (accessor idempotence)
// - Underrun detection and stickiness
//
// The reader must never panic on hostile input, and once `next()` reports
// an underrun it must keep reporting it.
fuzz_target!(|data: &[u8]| {
    let mut reader = TlvReader::new(data);
    loop {
        match reader.next() {
            Ok(Some(tag)) => {
                let length = reader.length();
                assert_eq!(reader.tag(), tag);

                let dup = reader.dup_bytes().unwrap();
                assert_eq!(dup.len(), length);

                // Re-reads must agree with the first read.
                let again = reader.dup_bytes().unwrap();
                assert_eq!(dup, again);

                let terminated = reader.dup_string().unwrap();
                assert_eq!(&terminated[..length], &dup[..]);
                assert_eq!(terminated[length], 0);

                // Typed accessors may reject the length but must not panic,
                // and on success must match the raw bytes.
                if let Ok(value) = reader.get::<u64>() {
                    let mut raw = [0u8; 8];
                    raw[..length].copy_from_slice(&dup);
                    assert_eq!(value, u64::from_le_bytes(raw));
                }
                let _ = reader.get::<bool>();
                let _ = reader.get::<f64>();
            }
            Ok(None) => {
                assert_eq!(reader.next(), Ok(None));
                break;
            }
            Err(e) => {
                assert_eq!(e, ReadError::Underrun);
                assert_eq!(reader.next(), Err(ReadError::Underrun));
                break;
            }
        }
    }
});
