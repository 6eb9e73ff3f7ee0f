#![warn(clippy::pedantic)]

pub mod decode;
pub mod error;
pub mod owned;
pub mod reader;
pub mod value;

pub use decode::{decode, DecodeTlv};
pub use error::ReadError;
pub use owned::OwnedBytes;
pub use reader::{Tag, TlvReader};
pub use value::FromTlv;
