// Token Ledger - Error Codes
//
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 100-199: Permission errors
// - 200-299: Input validation errors
// - 300-399: Movement errors
// - 400-499: Pause errors
// - 500-599: Blacklist errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Permission errors (100-199)
    // ========================================
    #[error("Not the owner")]
    NotOwner = 100,

    // ========================================
    // Input validation errors (200-299)
    // ========================================
    #[error("Invalid address")]
    InvalidAddress = 200,

    #[error("Amount cannot be zero")]
    ZeroAmount = 201,

    #[error("Name cannot be empty")]
    NameEmpty = 202,

    #[error("Name too long")]
    NameTooLong = 203,

    #[error("Symbol cannot be empty")]
    SymbolEmpty = 204,

    #[error("Symbol too long")]
    SymbolTooLong = 205,

    #[error("Decimals too high")]
    DecimalsTooHigh = 206,

    // ========================================
    // Movement errors (300-399)
    // ========================================
    #[error("Insufficient balance")]
    InsufficientBalance = 300,

    #[error("Insufficient allowance")]
    InsufficientAllowance = 301,

    #[error("Arithmetic overflow")]
    Overflow = 302,

    // ========================================
    // Pause errors (400-499)
    // ========================================
    #[error("Transfers are paused")]
    Paused = 400,

    #[error("Already paused")]
    AlreadyPaused = 401,

    #[error("Not paused")]
    NotPaused = 402,

    // ========================================
    // Blacklist errors (500-599)
    // ========================================
    #[error("Account is blacklisted")]
    Blacklisted = 500,

    #[error("Already blacklisted")]
    AlreadyBlacklisted = 501,

    #[error("Not blacklisted")]
    NotBlacklisted = 502,

    #[error("No funds to destroy")]
    NoFundsToDestroy = 503,
}

impl LedgerError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::NotOwner),
            200 => Some(Self::InvalidAddress),
            201 => Some(Self::ZeroAmount),
            202 => Some(Self::NameEmpty),
            203 => Some(Self::NameTooLong),
            204 => Some(Self::SymbolEmpty),
            205 => Some(Self::SymbolTooLong),
            206 => Some(Self::DecimalsTooHigh),
            300 => Some(Self::InsufficientBalance),
            301 => Some(Self::InsufficientAllowance),
            302 => Some(Self::Overflow),
            400 => Some(Self::Paused),
            401 => Some(Self::AlreadyPaused),
            402 => Some(Self::NotPaused),
            500 => Some(Self::Blacklisted),
            501 => Some(Self::AlreadyBlacklisted),
            502 => Some(Self::NotBlacklisted),
            503 => Some(Self::NoFundsToDestroy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ERRORS: [LedgerError; 18] = [
        LedgerError::NotOwner,
        LedgerError::InvalidAddress,
        LedgerError::ZeroAmount,
        LedgerError::NameEmpty,
        LedgerError::NameTooLong,
        LedgerError::SymbolEmpty,
        LedgerError::SymbolTooLong,
        LedgerError::DecimalsTooHigh,
        LedgerError::InsufficientBalance,
        LedgerError::InsufficientAllowance,
        LedgerError::Overflow,
        LedgerError::Paused,
        LedgerError::AlreadyPaused,
        LedgerError::NotPaused,
        LedgerError::Blacklisted,
        LedgerError::AlreadyBlacklisted,
        LedgerError::NotBlacklisted,
        LedgerError::NoFundsToDestroy,
    ];

    #[test]
    fn test_error_codes_unique() {
        // Verify all error codes are unique
        let mut seen = std::collections::HashSet::new();
        for err in ALL_ERRORS {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        for err in ALL_ERRORS {
            let code = err.code();
            let recovered = LedgerError::from_code(code);
            assert_eq!(recovered, Some(err));
        }
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(LedgerError::from_code(0), None);
        assert_eq!(LedgerError::from_code(9999), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LedgerError::NotOwner.to_string(), "Not the owner");
        assert_eq!(
            LedgerError::InsufficientAllowance.to_string(),
            "Insufficient allowance"
        );
        assert_eq!(LedgerError::Paused.to_string(), "Transfers are paused");
    }
}
