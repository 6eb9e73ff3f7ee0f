//! Wire-building helpers shared by the integration tests, the benchmarks
//! and the fuzz targets.
//!
//! These construct raw TLV8 byte streams for the reader to consume. They
//! are test fixtures, not an encoder: no coalescing decisions, no length
//! planning — the caller says exactly which on-wire elements to emit.

#![warn(clippy::pedantic)]

/// A single on-wire element: `tag ‖ len ‖ content`.
///
/// # Panics
///
/// If `content` exceeds 255 bytes — longer content is written as several
/// same-tag elements, see [`fragmented`].
#[must_use]
pub fn element(tag: u8, content: &[u8]) -> Vec<u8> {
    assert!(content.len() <= 255, "on-wire element content exceeds 255 bytes");
    let mut out = Vec::with_capacity(2 + content.len());
    out.push(tag);
    out.push(content.len() as u8);
    out.extend_from_slice(content);
    out
}

/// `content` written as a run of same-tag elements with the given fragment
/// sizes. The reader presents such a run as one logical element.
///
/// # Panics
///
/// If the fragment sizes do not sum to the content length, or any
/// continuation fragment is empty (a zero-length element ends a run).
#[must_use]
pub fn fragmented(tag: u8, content: &[u8], fragment_sizes: &[usize]) -> Vec<u8> {
    assert_eq!(
        fragment_sizes.iter().sum::<usize>(),
        content.len(),
        "fragment sizes must cover the content exactly"
    );
    let mut out = Vec::new();
    let mut rest = content;
    for (i, &size) in fragment_sizes.iter().enumerate() {
        assert!(i == 0 || size > 0, "only the first fragment may be empty");
        let (chunk, tail) = rest.split_at(size);
        out.extend_from_slice(&element(tag, chunk));
        rest = tail;
    }
    out
}

/// Concatenate pre-built element runs into one stream.
#[must_use]
pub fn stream<I: IntoIterator<Item = Vec<u8>>>(parts: I) -> Vec<u8> {
    parts.into_iter().flatten().collect()
}

/// Split `content` into maximal 255-byte fragments, the canonical way long
/// content appears on the wire.
#[must_use]
pub fn long_element(tag: u8, content: &[u8]) -> Vec<u8> {
    if content.is_empty() {
        return element(tag, content);
    }
    content
        .chunks(255)
        .flat_map(|chunk| element(tag, chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_layout() {
        assert_eq!(element(7, &[1, 2]), vec![7, 2, 1, 2]);
        assert_eq!(element(9, &[]), vec![9, 0]);
    }

    #[test]
    fn fragmented_layout() {
        assert_eq!(
            fragmented(1, &[10, 11, 12], &[2, 1]),
            vec![1, 2, 10, 11, 1, 1, 12]
        );
    }

    #[test]
    fn long_element_chunks_at_255() {
        let content = vec![0xAB; 600];
        let wire = long_element(3, &content);
        // 255 + 255 + 90, each with a 2-byte header.
        assert_eq!(wire.len(), 600 + 6);
        assert_eq!(wire[0], 3);
        assert_eq!(wire[1], 255);
        assert_eq!(wire[2 + 255], 3);
        assert_eq!(wire[2 + 255 + 1], 255);
        assert_eq!(wire[wire.len() - 92], 3);
        assert_eq!(wire[wire.len() - 91], 90);
    }
}
