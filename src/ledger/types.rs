//! Ledger Types
//!
//! Core data structures shared by the ledger operations.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_DECIMALS, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH};
use crate::serializer::{Reader, ReaderError, Serializer, Writer};

use super::{LedgerError, LedgerResult};

/// Immutable token metadata, fixed at ledger construction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name
    pub name: String,
    /// Token symbol/ticker
    pub symbol: String,
    /// Decimal places (0-18)
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: String, symbol: String, decimals: u8) -> Self {
        Self {
            name,
            symbol,
            decimals,
        }
    }

    /// Check name, symbol and decimals against the configured limits
    pub fn validate(&self) -> LedgerResult<()> {
        if self.name.is_empty() {
            return Err(LedgerError::NameEmpty);
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(LedgerError::NameTooLong);
        }
        if self.symbol.is_empty() {
            return Err(LedgerError::SymbolEmpty);
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(LedgerError::SymbolTooLong);
        }
        if self.decimals > MAX_DECIMALS {
            return Err(LedgerError::DecimalsTooHigh);
        }
        Ok(())
    }
}

impl Serializer for TokenMetadata {
    fn write(&self, writer: &mut Writer) {
        self.name.write(writer);
        self.symbol.write(writer);
        self.decimals.write(writer);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(Self {
            name: reader.read()?,
            symbol: reader.read()?,
            decimals: reader.read()?,
        })
    }

    fn size(&self) -> usize {
        self.name.size() + self.symbol.size() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_standard_metadata() {
        let metadata = TokenMetadata::new("Test".to_string(), "TST".to_string(), 6);
        assert!(metadata.validate().is_ok());
    }

    #[test]
    fn test_validate_name_bounds() {
        let empty = TokenMetadata::new(String::new(), "TST".to_string(), 6);
        assert_eq!(empty.validate(), Err(LedgerError::NameEmpty));

        let long = TokenMetadata::new("a".repeat(MAX_NAME_LENGTH + 1), "TST".to_string(), 6);
        assert_eq!(long.validate(), Err(LedgerError::NameTooLong));

        let exact = TokenMetadata::new("a".repeat(MAX_NAME_LENGTH), "TST".to_string(), 6);
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_validate_symbol_bounds() {
        let empty = TokenMetadata::new("Test".to_string(), String::new(), 6);
        assert_eq!(empty.validate(), Err(LedgerError::SymbolEmpty));

        let long = TokenMetadata::new("Test".to_string(), "s".repeat(MAX_SYMBOL_LENGTH + 1), 6);
        assert_eq!(long.validate(), Err(LedgerError::SymbolTooLong));
    }

    #[test]
    fn test_validate_decimals_bound() {
        let high = TokenMetadata::new("Test".to_string(), "TST".to_string(), MAX_DECIMALS + 1);
        assert_eq!(high.validate(), Err(LedgerError::DecimalsTooHigh));

        let max = TokenMetadata::new("Test".to_string(), "TST".to_string(), MAX_DECIMALS);
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_serializer_roundtrip() {
        let metadata = TokenMetadata::new("Test Token".to_string(), "TST".to_string(), 6);
        let bytes = metadata.to_bytes();
        assert_eq!(bytes.len(), metadata.size());
        let decoded = TokenMetadata::from_bytes(&bytes).expect("decode failed");
        assert_eq!(decoded, metadata);
    }
}
