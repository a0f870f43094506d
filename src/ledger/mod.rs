//! Token Ledger Module
//!
//! Balance and allowance bookkeeping for a single issuer-controlled
//! fungible token, with the administrative overrides such an issuer
//! operates: minting, burning, a global pause switch and a blacklist
//! with confiscation.
//!
//! # Features
//! - Standard transfers and delegated spending with checked arithmetic
//! - Owner-only supply management (issue / redeem)
//! - Pause switch freezing transfers and allowance changes
//! - Blacklist flagging and destruction of flagged funds
//! - Event records describing every state change
//! - Binary and JSON codecs for state, operations and events

pub mod address;
pub mod admin;
pub mod blacklist;
pub mod error;
pub mod events;
pub mod operation;
pub mod state;
pub mod transfer;
pub mod types;

pub use address::{Address, ADDRESS_SIZE};
pub use error::{LedgerError, LedgerResult};
pub use events::Event;
pub use operation::Operation;
pub use state::Ledger;
pub use types::TokenMetadata;
