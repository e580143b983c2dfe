//! External balance-transfer boundary.
//!
//! The swap never defines the token's supply rules; it only consumes a
//! standard balance-transfer capability. `TokenLedger` is that boundary,
//! and `MemoryToken` is an in-memory implementation with allowance
//! semantics for tests and embedders.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{AccountId, TokenAmount};

/// Token transfer failures.
///
/// The swap treats any of these as non-recoverable for the triggering
/// operation: the whole operation aborts with no state change.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    /// Holder balance below the requested transfer
    #[error("insufficient token balance: need {need}, have {have}")]
    InsufficientBalance {
        /// Amount needed
        need: TokenAmount,
        /// Amount available
        have: TokenAmount,
    },

    /// Spender allowance below the requested transfer
    #[error("insufficient allowance: need {need}, approved {approved}")]
    InsufficientAllowance {
        /// Amount needed
        need: TokenAmount,
        /// Amount approved
        approved: TokenAmount,
    },
}

/// Standard fungible-token transfer capability.
///
/// Semantics match the common fungible-token contract surface:
/// `transfer` moves a holder's own balance, `transfer_from` spends a
/// previously approved allowance. Either the full amount moves or the
/// call fails with no movement.
pub trait TokenLedger {
    /// Balance held by `account`
    fn balance_of(&self, account: &AccountId) -> TokenAmount;

    /// Remaining allowance `spender` may move out of `owner`'s balance
    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> TokenAmount;

    /// Set `spender`'s allowance over `owner`'s balance (overwrites)
    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: TokenAmount);

    /// Move `amount` from `from` to `to`
    ///
    /// # Errors
    /// Returns error if `from` holds less than `amount`
    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError>;

    /// Move `amount` from `from` to `to`, spending `spender`'s allowance
    ///
    /// # Errors
    /// Returns error if the allowance or `from`'s balance is below `amount`
    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError>;
}

/// In-memory token ledger with allowance semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryToken {
    balances: HashMap<AccountId, TokenAmount>,
    allowances: HashMap<(AccountId, AccountId), TokenAmount>,
}

impl MemoryToken {
    /// Create an empty token ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `account` out of thin air.
    ///
    /// Supply rules are out of scope here; this exists so embedders and
    /// tests can seed balances.
    pub fn mint(&mut self, account: AccountId, amount: TokenAmount) {
        let balance = self.balances.entry(account).or_default();
        *balance = balance.saturating_add(amount);
    }

    fn debit(&mut self, from: AccountId, amount: TokenAmount) -> Result<(), TokenError> {
        let have = self.balance_of(&from);
        let remaining = have.checked_sub(amount).ok_or(TokenError::InsufficientBalance {
            need: amount,
            have,
        })?;
        self.balances.insert(from, remaining);
        Ok(())
    }

    fn credit(&mut self, to: AccountId, amount: TokenAmount) {
        let balance = self.balances.entry(to).or_default();
        *balance = balance.saturating_add(amount);
    }
}

impl TokenLedger for MemoryToken {
    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.balances.get(account).copied().unwrap_or(TokenAmount::ZERO)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> TokenAmount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: TokenAmount) {
        self.allowances.insert((owner, spender), amount);
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        let approved = self.allowance(&from, &spender);
        let remaining = approved
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance {
                need: amount,
                approved,
            })?;

        // Balance check happens before the allowance is burned, so a
        // failed transfer leaves the allowance intact.
        self.debit(from, amount)?;
        self.credit(to, amount);
        self.allowances.insert((from, spender), remaining);
        Ok(())
    }
}
