use primitive_types::U256;
use thiserror::Error;

use super::Serializer;

/// Error while decoding from a byte stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ReaderError {
    #[error("Not enough bytes to read")]
    InvalidSize,

    #[error("Invalid value in stream")]
    InvalidValue,

    #[error("Invalid UTF-8 string")]
    InvalidString,

    #[error("Invalid hex")]
    InvalidHex,
}

/// Reader consuming the wire encoding from a borrowed slice
pub struct Reader<'a> {
    bytes: &'a [u8],
    total: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, total: 0 }
    }

    /// Read any serializable type from the stream
    pub fn read<T: Serializer>(&mut self) -> Result<T, ReaderError> {
        T::read(self)
    }

    /// Take the next `size` bytes from the stream
    pub fn read_bytes_ref(&mut self, size: usize) -> Result<&'a [u8], ReaderError> {
        if self.size() < size {
            return Err(ReaderError::InvalidSize);
        }
        let bytes = &self.bytes[self.total..self.total + size];
        self.total += size;
        Ok(bytes)
    }

    pub fn read_bytes_32(&mut self) -> Result<[u8; 32], ReaderError> {
        let bytes = self.read_bytes_ref(32)?;
        let mut array = [0u8; 32];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReaderError> {
        let bytes = self.read_bytes_ref(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ReaderError> {
        let bytes = self.read_bytes_ref(2)?;
        Ok(u16::from_be_bytes(
            bytes.try_into().map_err(|_| ReaderError::InvalidSize)?,
        ))
    }

    pub fn read_u32(&mut self) -> Result<u32, ReaderError> {
        let bytes = self.read_bytes_ref(4)?;
        Ok(u32::from_be_bytes(
            bytes.try_into().map_err(|_| ReaderError::InvalidSize)?,
        ))
    }

    pub fn read_u64(&mut self) -> Result<u64, ReaderError> {
        let bytes = self.read_bytes_ref(8)?;
        Ok(u64::from_be_bytes(
            bytes.try_into().map_err(|_| ReaderError::InvalidSize)?,
        ))
    }

    pub fn read_u128(&mut self) -> Result<u128, ReaderError> {
        let bytes = self.read_bytes_ref(16)?;
        Ok(u128::from_be_bytes(
            bytes.try_into().map_err(|_| ReaderError::InvalidSize)?,
        ))
    }

    /// Read a U256 from 32 big-endian bytes
    pub fn read_u256(&mut self) -> Result<U256, ReaderError> {
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut().rev() {
            *limb = self.read_u64()?;
        }
        Ok(U256(limbs))
    }

    pub fn read_bool(&mut self) -> Result<bool, ReaderError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ReaderError::InvalidValue),
        }
    }

    /// Read a u8-length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String, ReaderError> {
        let size = self.read_u8()? as usize;
        let bytes = self.read_bytes_ref(size)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ReaderError::InvalidString)
    }

    /// Bytes left in the stream
    pub fn size(&self) -> usize {
        self.bytes.len() - self.total
    }

    /// Bytes consumed so far
    pub fn total_read(&self) -> usize {
        self.total
    }
}
