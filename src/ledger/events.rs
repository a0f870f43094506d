//! Ledger Events
//!
//! Typed records emitted by ledger operations. Records are returned to the
//! caller alongside the state change, never stored in ledger state, so a
//! host can forward them and tests can assert on them independently.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::serializer::{Reader, ReaderError, Serializer, Writer};

use super::Address;

/// Record emitted by a mutating ledger operation
///
/// The zero address stands in for "no account" in `Transfer` records: mints
/// show `from = Address::ZERO`, burns and confiscations show
/// `to = Address::ZERO`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Value moved between accounts
    Transfer {
        from: Address,
        to: Address,
        amount: U256,
    },
    /// Allowance set to a new total
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
    /// Supply minted to the owner
    Issue { amount: U256 },
    /// Supply burned from the owner
    Redeem { amount: U256 },
    /// Transfers and approvals suspended
    Pause,
    /// Transfers and approvals resumed
    Unpause,
    /// Administrative control handed over
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    /// Account flagged on the blacklist
    AddedBlacklist { user: Address },
    /// Account removed from the blacklist
    RemovedBlacklist { user: Address },
    /// Blacklisted balance annihilated
    DestroyedBlackFunds { user: Address, amount: U256 },
}

impl Serializer for Event {
    fn write(&self, writer: &mut Writer) {
        match self {
            Self::Transfer { from, to, amount } => {
                writer.write_u8(0);
                from.write(writer);
                to.write(writer);
                amount.write(writer);
            }
            Self::Approval {
                owner,
                spender,
                amount,
            } => {
                writer.write_u8(1);
                owner.write(writer);
                spender.write(writer);
                amount.write(writer);
            }
            Self::Issue { amount } => {
                writer.write_u8(2);
                amount.write(writer);
            }
            Self::Redeem { amount } => {
                writer.write_u8(3);
                amount.write(writer);
            }
            Self::Pause => writer.write_u8(4),
            Self::Unpause => writer.write_u8(5),
            Self::OwnershipTransferred {
                previous_owner,
                new_owner,
            } => {
                writer.write_u8(6);
                previous_owner.write(writer);
                new_owner.write(writer);
            }
            Self::AddedBlacklist { user } => {
                writer.write_u8(7);
                user.write(writer);
            }
            Self::RemovedBlacklist { user } => {
                writer.write_u8(8);
                user.write(writer);
            }
            Self::DestroyedBlackFunds { user, amount } => {
                writer.write_u8(9);
                user.write(writer);
                amount.write(writer);
            }
        }
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let tag: u8 = reader.read()?;
        match tag {
            0 => Ok(Self::Transfer {
                from: reader.read()?,
                to: reader.read()?,
                amount: reader.read()?,
            }),
            1 => Ok(Self::Approval {
                owner: reader.read()?,
                spender: reader.read()?,
                amount: reader.read()?,
            }),
            2 => Ok(Self::Issue {
                amount: reader.read()?,
            }),
            3 => Ok(Self::Redeem {
                amount: reader.read()?,
            }),
            4 => Ok(Self::Pause),
            5 => Ok(Self::Unpause),
            6 => Ok(Self::OwnershipTransferred {
                previous_owner: reader.read()?,
                new_owner: reader.read()?,
            }),
            7 => Ok(Self::AddedBlacklist {
                user: reader.read()?,
            }),
            8 => Ok(Self::RemovedBlacklist {
                user: reader.read()?,
            }),
            9 => Ok(Self::DestroyedBlackFunds {
                user: reader.read()?,
                amount: reader.read()?,
            }),
            _ => Err(ReaderError::InvalidValue),
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Transfer { .. } => 1 + 32 + 32 + 32,
            Self::Approval { .. } => 1 + 32 + 32 + 32,
            Self::Issue { .. } | Self::Redeem { .. } => 1 + 32,
            Self::Pause | Self::Unpause => 1,
            Self::OwnershipTransferred { .. } => 1 + 32 + 32,
            Self::AddedBlacklist { .. } | Self::RemovedBlacklist { .. } => 1 + 32,
            Self::DestroyedBlackFunds { .. } => 1 + 32 + 32,
        }
    }
}
