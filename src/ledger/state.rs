//! Ledger State
//!
//! The `Ledger` struct owns every piece of state: balances, allowances,
//! total supply, the owner identity, the pause flag and the blacklist.
//! There is no ambient or global state; independent instances coexist.
//!
//! Exclusive access (`&mut self`) is the serialization boundary required
//! of the embedding host: one operation runs at a time against a
//! consistent snapshot. Hosts sharing a ledger across threads wrap it in
//! a lock.

use indexmap::{IndexMap, IndexSet};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::serializer::{Reader, ReaderError, Serializer, Writer};

use super::{Address, LedgerError, LedgerResult, TokenMetadata};

/// Balance/allowance ledger for a single issuer-controlled token
///
/// A zero balance and an absent entry are observably identical; the maps
/// never hold zero-valued entries. The same holds for allowances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub(crate) metadata: TokenMetadata,
    pub(crate) owner: Address,
    pub(crate) paused: bool,
    pub(crate) total_supply: U256,
    pub(crate) balances: IndexMap<Address, U256>,
    pub(crate) allowances: IndexMap<Address, IndexMap<Address, U256>>,
    pub(crate) blacklist: IndexSet<Address>,
}

impl Ledger {
    /// Create an empty ledger; supply starts at zero
    ///
    /// Fails with a validation error if the metadata violates the
    /// configured limits or `owner` is the zero address.
    pub fn new(metadata: TokenMetadata, owner: Address) -> LedgerResult<Self> {
        metadata.validate()?;
        if owner.is_zero() {
            return Err(LedgerError::InvalidAddress);
        }
        Ok(Self {
            metadata,
            owner,
            paused: false,
            total_supply: U256::zero(),
            balances: IndexMap::new(),
            allowances: IndexMap::new(),
            blacklist: IndexSet::new(),
        })
    }

    /// Create a ledger with an initial supply credited to the owner
    ///
    /// Construction is not an operation and emits no records.
    pub fn with_initial_supply(
        metadata: TokenMetadata,
        owner: Address,
        initial_supply: U256,
    ) -> LedgerResult<Self> {
        let mut ledger = Self::new(metadata, owner)?;
        if !initial_supply.is_zero() {
            ledger.total_supply = initial_supply;
            ledger.balances.insert(owner, initial_supply);
        }
        Ok(ledger)
    }

    // ========================================
    // Queries
    // ========================================

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance held by `account`; absent accounts hold zero
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Remaining amount `spender` may move out of `owner`'s balance
    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_blacklisted(&self, account: &Address) -> bool {
        self.blacklist.contains(account)
    }

    /// Iterate over all nonzero balances, in insertion order
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Audit check: the total supply equals the sum of all balances
    pub fn is_supply_consistent(&self) -> bool {
        let mut sum = U256::zero();
        for balance in self.balances.values() {
            match sum.checked_add(*balance) {
                Some(next) => sum = next,
                None => return false,
            }
        }
        sum == self.total_supply
    }

    // ========================================
    // Guards
    // ========================================

    pub(crate) fn require_owner(&self, caller: &Address) -> LedgerResult<()> {
        if *caller != self.owner {
            return Err(LedgerError::NotOwner);
        }
        Ok(())
    }

    pub(crate) fn require_not_paused(&self) -> LedgerResult<()> {
        if self.paused {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    pub(crate) fn require_not_blacklisted(&self, account: &Address) -> LedgerResult<()> {
        if self.blacklist.contains(account) {
            return Err(LedgerError::Blacklisted);
        }
        Ok(())
    }

    pub(crate) fn require_real_address(account: &Address) -> LedgerResult<()> {
        if account.is_zero() {
            return Err(LedgerError::InvalidAddress);
        }
        Ok(())
    }

    // ========================================
    // Bookkeeping
    // ========================================

    /// Move `amount` from `from` to `to` with checked arithmetic
    ///
    /// Callers have already validated every precondition, including balance
    /// sufficiency. An aliased move (`from == to`) or a zero amount leaves
    /// the balances untouched.
    pub(crate) fn move_balance(
        &mut self,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> LedgerResult<()> {
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let new_from = self
            .balance_of(from)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let new_to = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.set_balance(from, new_from);
        self.set_balance(to, new_to);
        Ok(())
    }

    /// Set a balance, dropping the entry when it reaches zero
    pub(crate) fn set_balance(&mut self, account: &Address, amount: U256) {
        if amount.is_zero() {
            self.balances.shift_remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }

    /// Set an allowance, dropping the entry when it reaches zero
    pub(crate) fn set_allowance(&mut self, owner: &Address, spender: &Address, amount: U256) {
        if amount.is_zero() {
            if let Some(spenders) = self.allowances.get_mut(owner) {
                spenders.shift_remove(spender);
                if spenders.is_empty() {
                    self.allowances.shift_remove(owner);
                }
            }
        } else {
            self.allowances
                .entry(*owner)
                .or_insert_with(IndexMap::new)
                .insert(*spender, amount);
        }
    }
}

impl Serializer for Ledger {
    fn write(&self, writer: &mut Writer) {
        self.metadata.write(writer);
        self.owner.write(writer);
        self.paused.write(writer);
        self.total_supply.write(writer);

        writer.write_u32(&(self.balances.len() as u32));
        for (account, balance) in &self.balances {
            account.write(writer);
            balance.write(writer);
        }

        writer.write_u32(&(self.allowances.len() as u32));
        for (owner, spenders) in &self.allowances {
            owner.write(writer);
            writer.write_u32(&(spenders.len() as u32));
            for (spender, amount) in spenders {
                spender.write(writer);
                amount.write(writer);
            }
        }

        writer.write_u32(&(self.blacklist.len() as u32));
        for account in &self.blacklist {
            account.write(writer);
        }
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let metadata = reader.read()?;
        let owner = reader.read()?;
        let paused = reader.read()?;
        let total_supply = reader.read()?;

        let balance_count = reader.read_u32()? as usize;
        let mut balances = IndexMap::with_capacity(balance_count);
        for _ in 0..balance_count {
            let account: Address = reader.read()?;
            let balance: U256 = reader.read()?;
            balances.insert(account, balance);
        }

        let owner_count = reader.read_u32()? as usize;
        let mut allowances = IndexMap::with_capacity(owner_count);
        for _ in 0..owner_count {
            let allowance_owner: Address = reader.read()?;
            let spender_count = reader.read_u32()? as usize;
            let mut spenders = IndexMap::with_capacity(spender_count);
            for _ in 0..spender_count {
                let spender: Address = reader.read()?;
                let amount: U256 = reader.read()?;
                spenders.insert(spender, amount);
            }
            allowances.insert(allowance_owner, spenders);
        }

        let blacklist_count = reader.read_u32()? as usize;
        let mut blacklist = IndexSet::with_capacity(blacklist_count);
        for _ in 0..blacklist_count {
            let account: Address = reader.read()?;
            blacklist.insert(account);
        }

        Ok(Self {
            metadata,
            owner,
            paused,
            total_supply,
            balances,
            allowances,
            blacklist,
        })
    }

    fn size(&self) -> usize {
        let mut size = self.metadata.size() + 32 + 1 + 32;
        size += 4 + self.balances.len() * (32 + 32);
        size += 4;
        for spenders in self.allowances.values() {
            size += 32 + 4 + spenders.len() * (32 + 32);
        }
        size += 4 + self.blacklist.len() * 32;
        size
    }
}
