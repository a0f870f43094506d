//! Ledger Constants
//!
//! Defines limits and configuration constants for the token ledger.

// ===== Metadata Limits =====

/// Maximum length of token name (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length of token symbol/ticker (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 12;

/// Maximum decimals for a token
pub const MAX_DECIMALS: u8 = 18;
