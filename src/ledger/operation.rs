//! Operation Dispatch
//!
//! A single entry point for hosts that deliver operations as data
//! (queued commands, wire messages, replay logs) instead of calling the
//! typed methods directly. The caller identity stays out of the payload:
//! the host authenticates the caller and passes it alongside.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::serializer::{Reader, ReaderError, Serializer, Writer};

use super::{Address, Event, Ledger, LedgerResult};

/// One state-changing request against a [`Ledger`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    Transfer {
        to: Address,
        amount: U256,
    },
    Approve {
        spender: Address,
        amount: U256,
    },
    TransferFrom {
        from: Address,
        to: Address,
        amount: U256,
    },
    IncreaseAllowance {
        spender: Address,
        delta: U256,
    },
    DecreaseAllowance {
        spender: Address,
        delta: U256,
    },
    Issue {
        amount: U256,
    },
    Redeem {
        amount: U256,
    },
    Pause,
    Unpause,
    TransferOwnership {
        new_owner: Address,
    },
    AddBlacklist {
        user: Address,
    },
    RemoveBlacklist {
        user: Address,
    },
    DestroyBlackFunds {
        user: Address,
    },
}

impl Operation {
    /// Stable snake_case name, matching the serde tag
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Transfer { .. } => "transfer",
            Operation::Approve { .. } => "approve",
            Operation::TransferFrom { .. } => "transfer_from",
            Operation::IncreaseAllowance { .. } => "increase_allowance",
            Operation::DecreaseAllowance { .. } => "decrease_allowance",
            Operation::Issue { .. } => "issue",
            Operation::Redeem { .. } => "redeem",
            Operation::Pause => "pause",
            Operation::Unpause => "unpause",
            Operation::TransferOwnership { .. } => "transfer_ownership",
            Operation::AddBlacklist { .. } => "add_blacklist",
            Operation::RemoveBlacklist { .. } => "remove_blacklist",
            Operation::DestroyBlackFunds { .. } => "destroy_black_funds",
        }
    }
}

impl Serializer for Operation {
    fn write(&self, writer: &mut Writer) {
        match self {
            Operation::Transfer { to, amount } => {
                writer.write_u8(0);
                to.write(writer);
                amount.write(writer);
            }
            Operation::Approve { spender, amount } => {
                writer.write_u8(1);
                spender.write(writer);
                amount.write(writer);
            }
            Operation::TransferFrom { from, to, amount } => {
                writer.write_u8(2);
                from.write(writer);
                to.write(writer);
                amount.write(writer);
            }
            Operation::IncreaseAllowance { spender, delta } => {
                writer.write_u8(3);
                spender.write(writer);
                delta.write(writer);
            }
            Operation::DecreaseAllowance { spender, delta } => {
                writer.write_u8(4);
                spender.write(writer);
                delta.write(writer);
            }
            Operation::Issue { amount } => {
                writer.write_u8(5);
                amount.write(writer);
            }
            Operation::Redeem { amount } => {
                writer.write_u8(6);
                amount.write(writer);
            }
            Operation::Pause => writer.write_u8(7),
            Operation::Unpause => writer.write_u8(8),
            Operation::TransferOwnership { new_owner } => {
                writer.write_u8(9);
                new_owner.write(writer);
            }
            Operation::AddBlacklist { user } => {
                writer.write_u8(10);
                user.write(writer);
            }
            Operation::RemoveBlacklist { user } => {
                writer.write_u8(11);
                user.write(writer);
            }
            Operation::DestroyBlackFunds { user } => {
                writer.write_u8(12);
                user.write(writer);
            }
        }
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(match reader.read_u8()? {
            0 => Operation::Transfer {
                to: reader.read()?,
                amount: reader.read()?,
            },
            1 => Operation::Approve {
                spender: reader.read()?,
                amount: reader.read()?,
            },
            2 => Operation::TransferFrom {
                from: reader.read()?,
                to: reader.read()?,
                amount: reader.read()?,
            },
            3 => Operation::IncreaseAllowance {
                spender: reader.read()?,
                delta: reader.read()?,
            },
            4 => Operation::DecreaseAllowance {
                spender: reader.read()?,
                delta: reader.read()?,
            },
            5 => Operation::Issue {
                amount: reader.read()?,
            },
            6 => Operation::Redeem {
                amount: reader.read()?,
            },
            7 => Operation::Pause,
            8 => Operation::Unpause,
            9 => Operation::TransferOwnership {
                new_owner: reader.read()?,
            },
            10 => Operation::AddBlacklist {
                user: reader.read()?,
            },
            11 => Operation::RemoveBlacklist {
                user: reader.read()?,
            },
            12 => Operation::DestroyBlackFunds {
                user: reader.read()?,
            },
            _ => return Err(ReaderError::InvalidValue),
        })
    }

    fn size(&self) -> usize {
        1 + match self {
            Operation::Transfer { .. } => 32 + 32,
            Operation::Approve { .. } => 32 + 32,
            Operation::TransferFrom { .. } => 32 + 32 + 32,
            Operation::IncreaseAllowance { .. } => 32 + 32,
            Operation::DecreaseAllowance { .. } => 32 + 32,
            Operation::Issue { .. } => 32,
            Operation::Redeem { .. } => 32,
            Operation::Pause | Operation::Unpause => 0,
            Operation::TransferOwnership { .. } => 32,
            Operation::AddBlacklist { .. } => 32,
            Operation::RemoveBlacklist { .. } => 32,
            Operation::DestroyBlackFunds { .. } => 32,
        }
    }
}

impl Ledger {
    /// Apply one operation on behalf of an authenticated `caller`
    ///
    /// Routes to the corresponding typed method; semantics, guard order
    /// and emitted records are identical to calling it directly.
    pub fn apply(&mut self, caller: &Address, operation: Operation) -> LedgerResult<Vec<Event>> {
        match operation {
            Operation::Transfer { to, amount } => self.transfer(caller, &to, amount),
            Operation::Approve { spender, amount } => self.approve(caller, &spender, amount),
            Operation::TransferFrom { from, to, amount } => {
                self.transfer_from(caller, &from, &to, amount)
            }
            Operation::IncreaseAllowance { spender, delta } => {
                self.increase_allowance(caller, &spender, delta)
            }
            Operation::DecreaseAllowance { spender, delta } => {
                self.decrease_allowance(caller, &spender, delta)
            }
            Operation::Issue { amount } => self.issue(caller, amount),
            Operation::Redeem { amount } => self.redeem(caller, amount),
            Operation::Pause => self.pause(caller),
            Operation::Unpause => self.unpause(caller),
            Operation::TransferOwnership { new_owner } => {
                self.transfer_ownership(caller, &new_owner)
            }
            Operation::AddBlacklist { user } => self.add_blacklist(caller, &user),
            Operation::RemoveBlacklist { user } => self.remove_blacklist(caller, &user),
            Operation::DestroyBlackFunds { user } => self.destroy_black_funds(caller, &user),
        }
    }
}
