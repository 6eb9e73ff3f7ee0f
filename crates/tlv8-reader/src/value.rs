use crate::error::ReadError;
use crate::reader::TlvReader;

/// A value that can be extracted from the current element of a reader.
///
/// Used through [`TlvReader::get`], which checks that an element is framed
/// and rewinds the cursor afterwards. Implementations exist for `bool`, the
/// fixed-width integers and both floats.
///
/// # Width and sign rules
///
/// TLV8 elements are untyped, so the wire length picks the decode width:
/// it must be one of 1, 2, 4 or 8 bytes and no wider than the destination.
/// The payload is read as an unsigned little-endian integer of the *wire*
/// width; for a signed destination it is then reinterpreted as signed at
/// that width before widening. A one-byte `0xAB` read into an `i16` is
/// therefore `-85`, not `171`. Unsigned destinations zero-extend.
///
/// Floats require the exact wire length (4 for `f32`, 8 for `f64`) and are
/// bit-cast from the little-endian integer. `bool` requires length 1; any
/// nonzero byte is `true`.
///
/// # Wrapper types
///
/// Types whose wire form is one of the primitives can implement this in
/// terms of [`TlvReader::get`]:
///
/// ```
/// use tlv8_reader::{FromTlv, ReadError, TlvReader};
///
/// #[derive(Debug, PartialEq)]
/// enum Mode { Off, On }
///
/// impl FromTlv for Mode {
///     fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError> {
///         match reader.get::<u8>()? {
///             0 => Ok(Mode::Off),
///             _ => Ok(Mode::On),
///         }
///     }
/// }
/// ```
pub trait FromTlv: Sized {
    /// Read the current element's payload as `Self`.
    ///
    /// # Errors
    ///
    /// [`ReadError::WrongType`] if the element's length does not fit the
    /// destination; wrapper impls may report anything a nested
    /// [`TlvReader::get`] reports.
    fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError>;
}

fn wrong_type(reader: &TlvReader<'_>) -> ReadError {
    ReadError::WrongType {
        tag: reader.tag(),
        length: reader.length(),
    }
}

macro_rules! unsigned_from_tlv {
    ($($t:ty),* $(,)?) => {$(
        impl FromTlv for $t {
            fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError> {
                const WIDTH: usize = std::mem::size_of::<$t>();
                match reader.length() {
                    1 => Ok(reader.read_u8() as $t),
                    2 if WIDTH >= 2 => Ok(reader.read_u16() as $t),
                    4 if WIDTH >= 4 => Ok(reader.read_u32() as $t),
                    8 if WIDTH >= 8 => Ok(reader.read_u64() as $t),
                    _ => Err(wrong_type(reader)),
                }
            }
        }
    )*};
}

macro_rules! signed_from_tlv {
    ($($t:ty),* $(,)?) => {$(
        impl FromTlv for $t {
            fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError> {
                const WIDTH: usize = std::mem::size_of::<$t>();
                // Sign-reinterpret at the wire width, then widen.
                match reader.length() {
                    1 => Ok(reader.read_u8() as i8 as $t),
                    2 if WIDTH >= 2 => Ok(reader.read_u16() as i16 as $t),
                    4 if WIDTH >= 4 => Ok(reader.read_u32() as i32 as $t),
                    8 if WIDTH >= 8 => Ok(reader.read_u64() as i64 as $t),
                    _ => Err(wrong_type(reader)),
                }
            }
        }
    )*};
}

unsigned_from_tlv!(u8, u16, u32, u64);
signed_from_tlv!(i8, i16, i32, i64);

impl FromTlv for bool {
    fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError> {
        if reader.length() != 1 {
            return Err(wrong_type(reader));
        }
        Ok(reader.read_u8() != 0)
    }
}

impl FromTlv for f32 {
    fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError> {
        if reader.length() != 4 {
            return Err(wrong_type(reader));
        }
        Ok(f32::from_bits(reader.read_u32()))
    }
}

impl FromTlv for f64 {
    fn from_tlv(reader: &mut TlvReader<'_>) -> Result<Self, ReadError> {
        if reader.length() != 8 {
            return Err(wrong_type(reader));
        }
        Ok(f64::from_bits(reader.read_u64()))
    }
}
