//! Administrative Operations
//!
//! Owner-only supply management, the pause switch and ownership handoff.
//! None of these are gated on the pause flag: the owner keeps full
//! control of the ledger while transfers are frozen.

use log::debug;
use primitive_types::U256;

use super::{Address, Event, Ledger, LedgerError, LedgerResult};

impl Ledger {
    /// Mint `amount` new units into the owner's balance
    ///
    /// Supply only ever enters the ledger through the owner's account;
    /// distribution happens through ordinary transfers afterwards.
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `amount` - Amount to mint, nonzero
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Issue record, then transfer record from the zero address
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::ZeroAmount)` - `amount` is zero
    /// * `Err(LedgerError::Overflow)` - Supply or owner balance would not fit
    pub fn issue(&mut self, caller: &Address, amount: U256) -> LedgerResult<Vec<Event>> {
        // 1. Owner only
        self.require_owner(caller)?;

        // 2. Minting zero is meaningless
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        // 3. Checked arithmetic on both sides
        let owner = self.owner;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_balance = self
            .balance_of(&owner)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        // 4. Mint
        self.total_supply = new_supply;
        self.set_balance(&owner, new_balance);

        debug!("Issued {} to {} (supply: {})", amount, owner, new_supply);

        Ok(vec![
            Event::Issue { amount },
            Event::Transfer {
                from: Address::ZERO,
                to: owner,
                amount,
            },
        ])
    }

    /// Burn `amount` units out of the owner's balance
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `amount` - Amount to burn, nonzero
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Redeem record, then transfer record to the zero address
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::ZeroAmount)` - `amount` is zero
    /// * `Err(LedgerError::InsufficientBalance)` - Owner holds less than `amount`
    pub fn redeem(&mut self, caller: &Address, amount: U256) -> LedgerResult<Vec<Event>> {
        // 1. Owner only
        self.require_owner(caller)?;

        // 2. Burning zero is meaningless
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        // 3. The owner must hold the amount; the supply covers it whenever
        //    the books balance
        let owner = self.owner;
        let new_balance = self
            .balance_of(&owner)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;

        // 4. Burn
        self.total_supply = new_supply;
        self.set_balance(&owner, new_balance);

        debug!("Redeemed {} from {} (supply: {})", amount, owner, new_supply);

        Ok(vec![
            Event::Redeem { amount },
            Event::Transfer {
                from: owner,
                to: Address::ZERO,
                amount,
            },
        ])
    }

    /// Halt transfers and allowance changes
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Pause record
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::AlreadyPaused)` - Ledger is already paused
    pub fn pause(&mut self, caller: &Address) -> LedgerResult<Vec<Event>> {
        self.require_owner(caller)?;
        if self.paused {
            return Err(LedgerError::AlreadyPaused);
        }
        self.paused = true;

        debug!("Ledger paused by {}", caller);

        Ok(vec![Event::Pause])
    }

    /// Resume transfers and allowance changes
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Unpause record
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::NotPaused)` - Ledger is not paused
    pub fn unpause(&mut self, caller: &Address) -> LedgerResult<Vec<Event>> {
        self.require_owner(caller)?;
        if !self.paused {
            return Err(LedgerError::NotPaused);
        }
        self.paused = false;

        debug!("Ledger unpaused by {}", caller);

        Ok(vec![Event::Unpause])
    }

    /// Hand every administrative capability to `new_owner`
    ///
    /// Takes effect immediately: the previous owner retains nothing, and
    /// future mints credit the new owner. Balances are untouched.
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `new_owner` - Account receiving control, nonzero
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Ownership record with both identities
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::InvalidAddress)` - `new_owner` is the zero address
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: &Address,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Owner only
        self.require_owner(caller)?;

        // 2. The ledger always has a real owner
        Self::require_real_address(new_owner)?;

        // 3. Hand over
        let previous_owner = self.owner;
        self.owner = *new_owner;

        debug!("Ownership transferred from {} to {}", previous_owner, new_owner);

        Ok(vec![Event::OwnershipTransferred {
            previous_owner,
            new_owner: *new_owner,
        }])
    }
}
