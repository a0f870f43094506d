//! Binary Serialization
//!
//! Compact byte codec used to carry ledger types across the host boundary.
//! Integers are big-endian, strings are u8-length-prefixed UTF-8, enums are
//! tagged with a single byte.

mod defaults;
mod reader;
mod writer;

pub use reader::{Reader, ReaderError};
pub use writer::Writer;

/// Types with a byte-precise wire encoding
pub trait Serializer: Sized {
    fn write(&self, writer: &mut Writer);

    fn read(reader: &mut Reader) -> Result<Self, ReaderError>;

    /// Exact encoded size in bytes
    fn size(&self) -> usize;

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());
        let mut writer = Writer::new(&mut bytes);
        self.write(&mut writer);
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ReaderError> {
        let mut reader = Reader::new(bytes);
        Self::read(&mut reader)
    }

    fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    fn from_hex(value: &str) -> Result<Self, ReaderError> {
        let bytes = hex::decode(value).map_err(|_| ReaderError::InvalidHex)?;
        Self::from_bytes(&bytes)
    }
}
