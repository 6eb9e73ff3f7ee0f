use crate::error::ReadError;
use crate::reader::TlvReader;

/// A structure that can be decoded from a TLV8 element stream.
///
/// The implementation reads whatever elements it needs from the reader —
/// typically a `next_expected` / `get` pair per field. TLV8 has no
/// anonymous outer container, so a top-level structure reads its fields
/// directly from the root stream; see [`decode`]. Nested structures are
/// read through [`TlvReader::decode_nested`], which wraps the
/// open/decode/close sequence.
pub trait DecodeTlv: Sized {
    /// Read `Self` from the reader's element stream.
    ///
    /// # Errors
    ///
    /// Whatever the underlying reader calls report.
    fn decode(reader: &mut TlvReader<'_>) -> Result<Self, ReadError>;
}

/// Decode a top-level structure from a byte slice.
///
/// # Errors
///
/// Whatever [`DecodeTlv::decode`] reports for the type.
pub fn decode<T: DecodeTlv>(data: &[u8]) -> Result<T, ReadError> {
    let mut reader = TlvReader::new(data);
    T::decode(&mut reader)
}

impl TlvReader<'_> {
    /// Decode the current element's payload as a nested structure.
    ///
    /// Opens a container over the payload, runs [`DecodeTlv::decode`] on
    /// it, and closes the container — consuming the element like any other
    /// open/close cycle, so the parent's `next()` is the follow-up call.
    ///
    /// # Errors
    ///
    /// [`ReadError::IncorrectState`] with no element framed;
    /// [`ReadError::Underrun`] if the nested stream is truncated;
    /// anything the type's decode reports.
    pub fn decode_nested<T: DecodeTlv>(&mut self) -> Result<T, ReadError> {
        let mut nested = self.open_container()?;
        let value = T::decode(&mut nested)?;
        nested.close()?;
        Ok(value)
    }
}
