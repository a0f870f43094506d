//! Account Addresses
//!
//! Accounts are keyed by an opaque 32-byte identity supplied by the host.
//! The ledger never derives or verifies identities; it only compares them.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer as SerdeSerializer};

use crate::serializer::{Reader, ReaderError, Serializer, Writer};

/// Size of an account address in bytes
pub const ADDRESS_SIZE: usize = 32;

/// Opaque account identity
///
/// The all-zero address is not a real account: it is the sentinel used as
/// the mint/burn counterparty in emitted records, and every operation that
/// needs a real account rejects it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Null sentinel address
    pub const ZERO: Address = Address([0u8; ADDRESS_SIZE]);

    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_SIZE]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }
}

impl FromStr for Address {
    type Err = ReaderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(value).map_err(|_| ReaderError::InvalidHex)?;
        let array: [u8; ADDRESS_SIZE] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ReaderError::InvalidSize)?;
        Ok(Address(array))
    }
}

impl Serialize for Address {
    fn serialize<S: SerdeSerializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Address::from_str(&value).map_err(D::Error::custom)
    }
}

impl Serializer for Address {
    fn write(&self, writer: &mut Writer) {
        writer.write_bytes(&self.0);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(Address(reader.read_bytes_32()?))
    }

    fn size(&self) -> usize {
        ADDRESS_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(seed: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[0] = seed;
        Address::new(bytes)
    }

    #[test]
    fn test_zero_sentinel() {
        assert!(Address::ZERO.is_zero());
        assert!(!test_address(1).is_zero());
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let address = test_address(0xAB);
        let encoded = address.to_string();
        assert_eq!(encoded.len(), ADDRESS_SIZE * 2);
        let decoded = Address::from_str(&encoded).expect("parse failed");
        assert_eq!(decoded, address);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            Address::from_str("zz"),
            Err(ReaderError::InvalidHex),
            "non-hex input must be rejected"
        );
        assert_eq!(
            Address::from_str("abcd"),
            Err(ReaderError::InvalidSize),
            "short input must be rejected"
        );
    }

    #[test]
    fn test_serializer_roundtrip() {
        let address = test_address(7);
        let bytes = address.to_bytes();
        assert_eq!(bytes.len(), ADDRESS_SIZE);
        let decoded = Address::from_bytes(&bytes).expect("decode failed");
        assert_eq!(decoded, address);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let address = test_address(2);
        let json = serde_json::to_string(&address).expect("serialize failed");
        assert_eq!(json, format!("\"{}\"", address));
        let decoded: Address = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(decoded, address);
    }
}
