//! Standard Token Operations
//!
//! Caller-initiated transfers and allowance management. Every operation
//! here is gated on the pause flag and on the blacklist; validation runs
//! to completion before any state is touched, so a failed operation
//! leaves the ledger exactly as it was.

use log::debug;
use primitive_types::U256;

use super::{Address, Event, Ledger, LedgerError, LedgerResult};

impl Ledger {
    /// Move `amount` from the caller's balance to `to`
    ///
    /// A transfer of zero succeeds and emits a record without touching
    /// any balance. A self-transfer is balance-neutral but still subject
    /// to every guard.
    ///
    /// # Arguments
    /// * `caller` - Account whose balance is debited
    /// * `to` - Account to credit
    /// * `amount` - Amount to move
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Transfer record
    /// * `Err(LedgerError::Paused)` - Ledger is paused
    /// * `Err(LedgerError::InvalidAddress)` - `to` is the zero address
    /// * `Err(LedgerError::Blacklisted)` - Either party is blacklisted
    /// * `Err(LedgerError::InsufficientBalance)` - Caller holds less than `amount`
    pub fn transfer(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: U256,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Ledger must be live
        self.require_not_paused()?;

        // 2. The zero address never receives funds
        Self::require_real_address(to)?;

        // 3. Neither party may be blacklisted
        self.require_not_blacklisted(caller)?;
        self.require_not_blacklisted(to)?;

        // 4. The caller must hold the amount
        if self.balance_of(caller) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        // 5. Move the funds
        self.move_balance(caller, to, amount)?;

        debug!("Transferred {} from {} to {}", amount, caller, to);

        Ok(vec![Event::Transfer {
            from: *caller,
            to: *to,
            amount,
        }])
    }

    /// Set the allowance granted by the caller to `spender`
    ///
    /// This overwrites the previous allowance unconditionally, including
    /// to zero. Changing a nonzero allowance to another nonzero value is
    /// racy against an in-flight [`Ledger::transfer_from`]; prefer
    /// [`Ledger::increase_allowance`] / [`Ledger::decrease_allowance`]
    /// for adjustments.
    ///
    /// # Arguments
    /// * `caller` - Account granting the allowance
    /// * `spender` - Account allowed to spend
    /// * `amount` - New allowance, replacing any previous value
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Approval record with the new allowance
    /// * `Err(LedgerError::Paused)` - Ledger is paused
    /// * `Err(LedgerError::InvalidAddress)` - `spender` is the zero address
    /// * `Err(LedgerError::Blacklisted)` - Either party is blacklisted
    pub fn approve(
        &mut self,
        caller: &Address,
        spender: &Address,
        amount: U256,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Ledger must be live
        self.require_not_paused()?;

        // 2. The zero address cannot spend
        Self::require_real_address(spender)?;

        // 3. Neither party may be blacklisted
        self.require_not_blacklisted(caller)?;
        self.require_not_blacklisted(spender)?;

        // 4. Overwrite the allowance
        self.set_allowance(caller, spender, amount);

        debug!("Approved {} for {} by {}", amount, spender, caller);

        Ok(vec![Event::Approval {
            owner: *caller,
            spender: *spender,
            amount,
        }])
    }

    /// Move `amount` from `from` to `to`, consuming the caller's allowance
    ///
    /// The allowance is checked before the balance, so a caller short on
    /// both is told about the allowance first. On success the remaining
    /// allowance is re-published through an approval record.
    ///
    /// # Arguments
    /// * `caller` - Spender consuming their allowance
    /// * `from` - Account whose balance is debited
    /// * `to` - Account to credit
    /// * `amount` - Amount to move
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Transfer record, then approval record with the remaining allowance
    /// * `Err(LedgerError::Paused)` - Ledger is paused
    /// * `Err(LedgerError::InvalidAddress)` - `to` is the zero address
    /// * `Err(LedgerError::Blacklisted)` - Any involved party is blacklisted
    /// * `Err(LedgerError::InsufficientAllowance)` - Allowance below `amount`
    /// * `Err(LedgerError::InsufficientBalance)` - `from` holds less than `amount`
    pub fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Ledger must be live
        self.require_not_paused()?;

        // 2. The zero address never receives funds
        Self::require_real_address(to)?;

        // 3. No involved party may be blacklisted
        self.require_not_blacklisted(from)?;
        self.require_not_blacklisted(to)?;
        self.require_not_blacklisted(caller)?;

        // 4. Allowance first
        let remaining = self
            .allowance(from, caller)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance)?;

        // 5. Then the balance
        if self.balance_of(from) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        // 6. Move the funds and consume the allowance
        self.move_balance(from, to, amount)?;
        self.set_allowance(from, caller, remaining);

        debug!(
            "Transferred {} from {} to {} by {} (remaining allowance: {})",
            amount, from, to, caller, remaining
        );

        Ok(vec![
            Event::Transfer {
                from: *from,
                to: *to,
                amount,
            },
            Event::Approval {
                owner: *from,
                spender: *caller,
                amount: remaining,
            },
        ])
    }

    /// Raise the allowance granted by the caller to `spender` by `delta`
    ///
    /// # Arguments
    /// * `caller` - Account granting the allowance
    /// * `spender` - Account allowed to spend
    /// * `delta` - Amount added to the current allowance
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Approval record with the new allowance
    /// * `Err(LedgerError::Paused)` - Ledger is paused
    /// * `Err(LedgerError::InvalidAddress)` - `spender` is the zero address
    /// * `Err(LedgerError::Blacklisted)` - Either party is blacklisted
    /// * `Err(LedgerError::Overflow)` - New allowance would not fit
    pub fn increase_allowance(
        &mut self,
        caller: &Address,
        spender: &Address,
        delta: U256,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Ledger must be live
        self.require_not_paused()?;

        // 2. The zero address cannot spend
        Self::require_real_address(spender)?;

        // 3. Neither party may be blacklisted
        self.require_not_blacklisted(caller)?;
        self.require_not_blacklisted(spender)?;

        // 4. Raise with checked arithmetic
        let amount = self
            .allowance(caller, spender)
            .checked_add(delta)
            .ok_or(LedgerError::Overflow)?;
        self.set_allowance(caller, spender, amount);

        debug!("Raised allowance for {} by {} to {}", spender, caller, amount);

        Ok(vec![Event::Approval {
            owner: *caller,
            spender: *spender,
            amount,
        }])
    }

    /// Lower the allowance granted by the caller to `spender` by `delta`
    ///
    /// # Arguments
    /// * `caller` - Account granting the allowance
    /// * `spender` - Account allowed to spend
    /// * `delta` - Amount subtracted from the current allowance
    ///
    /// # Returns
    /// * `Ok(Vec<Event>)` - Approval record with the new allowance
    /// * `Err(LedgerError::Paused)` - Ledger is paused
    /// * `Err(LedgerError::InvalidAddress)` - `spender` is the zero address
    /// * `Err(LedgerError::Blacklisted)` - Either party is blacklisted
    /// * `Err(LedgerError::InsufficientAllowance)` - `delta` exceeds the current allowance
    pub fn decrease_allowance(
        &mut self,
        caller: &Address,
        spender: &Address,
        delta: U256,
    ) -> LedgerResult<Vec<Event>> {
        // 1. Ledger must be live
        self.require_not_paused()?;

        // 2. The zero address cannot spend
        Self::require_real_address(spender)?;

        // 3. Neither party may be blacklisted
        self.require_not_blacklisted(caller)?;
        self.require_not_blacklisted(spender)?;

        // 4. Lower with checked arithmetic
        let amount = self
            .allowance(caller, spender)
            .checked_sub(delta)
            .ok_or(LedgerError::InsufficientAllowance)?;
        self.set_allowance(caller, spender, amount);

        debug!("Lowered allowance for {} by {} to {}", spender, caller, amount);

        Ok(vec![Event::Approval {
            owner: *caller,
            spender: *spender,
            amount,
        }])
    }
}
