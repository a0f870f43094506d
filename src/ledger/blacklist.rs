//! Blacklist Operations
//!
//! Owner-only compliance controls: flag an account, unflag it, or wipe a
//! flagged account's funds out of circulation. Flagging by itself moves
//! nothing; it only locks the account out of transfers and approvals.
//! Like the other administrative operations, these work while paused.

use log::debug;
use primitive_types::U256;

use super::{Address, Event, Ledger, LedgerError, LedgerResult};

impl Ledger {
    /// Flag `user` as blacklisted
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `user` - Account to flag, nonzero
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Blacklist record
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::InvalidAddress)` - `user` is the zero address
    /// * `Err(LedgerError::AlreadyBlacklisted)` - `user` is already flagged
    pub fn add_blacklist(&mut self, caller: &Address, user: &Address) -> LedgerResult<Vec<Event>> {
        // 1. Owner only
        self.require_owner(caller)?;

        // 2. The zero address is a sentinel, not an account
        Self::require_real_address(user)?;

        // 3. Flagging twice is a caller error
        if self.blacklist.contains(user) {
            return Err(LedgerError::AlreadyBlacklisted);
        }

        // 4. Flag
        self.blacklist.insert(*user);

        debug!("Blacklisted {}", user);

        Ok(vec![Event::AddedBlacklist { user: *user }])
    }

    /// Clear the blacklist flag on `user`
    ///
    /// The account immediately regains access to transfers and
    /// approvals; its balance was never touched.
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `user` - Account to unflag
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Blacklist removal record
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::NotBlacklisted)` - `user` is not flagged
    pub fn remove_blacklist(
        &mut self,
        caller: &Address,
        user: &Address,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Owner only
        self.require_owner(caller)?;

        // 2. Only flagged accounts can be unflagged
        if !self.blacklist.contains(user) {
            return Err(LedgerError::NotBlacklisted);
        }

        // 3. Unflag
        self.blacklist.shift_remove(user);

        debug!("Removed {} from blacklist", user);

        Ok(vec![Event::RemovedBlacklist { user: *user }])
    }

    /// Destroy the entire balance of a blacklisted account
    ///
    /// The confiscated amount leaves circulation: the account drops to
    /// zero and the total supply shrinks by the same amount. An empty
    /// account is rejected rather than silently accepted, so a misspelt
    /// target cannot masquerade as a successful confiscation.
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `user` - Blacklisted account to wipe
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Destruction record, then transfer record to the zero address
    /// * `Err(LedgerError::NotOwner)` - Caller is not the owner
    /// * `Err(LedgerError::NotBlacklisted)` - `user` is not flagged
    /// * `Err(LedgerError::NoFundsToDestroy)` - `user` holds nothing
    pub fn destroy_black_funds(
        &mut self,
        caller: &Address,
        user: &Address,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Owner only
        self.require_owner(caller)?;

        // 2. Only blacklisted accounts can be wiped
        if !self.blacklist.contains(user) {
            return Err(LedgerError::NotBlacklisted);
        }

        // 3. There must be something to destroy
        let amount = self.balance_of(user);
        if amount.is_zero() {
            return Err(LedgerError::NoFundsToDestroy);
        }

        // 4. Remove the funds from circulation
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.total_supply = new_supply;
        self.set_balance(user, U256::zero());

        debug!(
            "Destroyed {} held by blacklisted {} (supply: {})",
            amount, user, new_supply
        );

        Ok(vec![
            Event::DestroyedBlackFunds {
                user: *user,
                amount,
            },
            Event::Transfer {
                from: *user,
                to: Address::ZERO,
                amount,
            },
        ])
    }
}
