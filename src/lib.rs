//! Token Ledger
//!
//! Balance and allowance ledger for an issuer-controlled fungible token,
//! with the administrative overrides the classic centralized stablecoins
//! carry: supply issuance and destruction, a global transfer pause, a
//! per-account blacklist, and forced confiscation of flagged balances.
//!
//! The ledger is plain in-memory state. The embedding host authenticates
//! callers, invokes one operation at a time through [`Ledger::apply`] (or
//! the per-operation methods), and persists the resulting state; every
//! operation validates all preconditions before its first state write and
//! returns the typed [`Event`] records it emitted.

pub mod config;
pub mod ledger;
pub mod serializer;

pub use ledger::{Address, Event, Ledger, LedgerError, LedgerResult, Operation, TokenMetadata};
