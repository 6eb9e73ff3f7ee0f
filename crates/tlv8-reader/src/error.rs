use crate::reader::Tag;

/// Errors that can occur while reading a TLV8 stream.
///
/// Only `Underrun` is sticky: once a reader reports it, every subsequent
/// call to [`TlvReader::next`](crate::TlvReader::next) on that reader
/// reports it again. The remaining variants describe a single failed call
/// and leave the cursor usable.
///
/// A cleanly exhausted stream is not an error — `next()` returns
/// `Ok(None)` for it, and keeps doing so on repeated calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The stream ended inside an element: a declared fragment length ran
    /// past the end of the source, or a continuation tag had no length
    /// byte after it.
    #[error("truncated element: source ended inside a declared fragment")]
    Underrun,

    /// An accessor was called with no element framed — the reader is
    /// freshly initialized, at end of stream, or its current element was
    /// consumed by a container open/close cycle.
    #[error("no element is framed for reading")]
    IncorrectState,

    /// `next_expected` framed an element with a different tag, or the
    /// stream ended before another element (`found: None`). The cursor is
    /// advanced normally, so the mismatched element can still be read.
    #[error("expected tag {expected:#04X}, found {found:?}")]
    UnexpectedElement { expected: Tag, found: Option<Tag> },

    /// The element's length does not fit the requested type: integer
    /// lengths must be one of 1/2/4/8 and no wider than the destination,
    /// floats must be exactly 4 or 8 bytes, bools exactly 1.
    #[error("element with tag {tag:#04X} has length {length}, which does not fit the requested type")]
    WrongType { tag: Tag, length: usize },

    /// The caller-supplied destination buffer cannot hold the payload
    /// (plus the NUL terminator, for string reads).
    #[error("destination holds {capacity} bytes but {needed} are needed")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// Allocating a duplicate of the payload failed.
    #[error("payload duplication failed: out of memory")]
    OutOfMemory,
}
