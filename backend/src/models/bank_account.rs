//! Bank account model
//!
//! The player's ledger. Every simulated play withdraws the ticket price and
//! deposits whatever the ticket won.
//!
//! There is no overdraft limit: a player who keeps losing simply goes deeper
//! into debt.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during ledger operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Amount must not be negative, got {amount}")]
    InvalidAmount { amount: i64 },

    #[error("Ledger arithmetic overflowed")]
    Overflow,
}

/// Running balance of a simulated player
///
/// `balance == total_deposited - total_withdrawn` holds after every
/// successful operation. A failed operation leaves the account untouched.
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::BankAccount;
///
/// let mut account = BankAccount::new();
/// account.withdraw(200).unwrap(); // buy a $2.00 ticket
/// account.deposit(3000).unwrap(); // win $30.00
/// assert_eq!(account.balance(), 2800);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Current balance (i64 cents), negative = in debt
    balance: i64,

    /// Sum of all withdrawals since the last reset
    total_withdrawn: i64,

    /// Sum of all deposits since the last reset
    total_deposited: i64,

    /// Most negative balance observed (0 if never in debt)
    lowest_balance: i64,
}

impl BankAccount {
    /// Create an empty account
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `amount` from the balance, going into debt if necessary
    pub fn withdraw(&mut self, amount: i64) -> Result<(), BankError> {
        if amount < 0 {
            return Err(BankError::InvalidAmount { amount });
        }

        let balance = self.balance.checked_sub(amount).ok_or(BankError::Overflow)?;
        let total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(BankError::Overflow)?;

        self.balance = balance;
        self.total_withdrawn = total_withdrawn;
        self.lowest_balance = self.lowest_balance.min(balance);
        Ok(())
    }

    /// Add `amount` to the balance
    pub fn deposit(&mut self, amount: i64) -> Result<(), BankError> {
        if amount < 0 {
            return Err(BankError::InvalidAmount { amount });
        }

        let balance = self.balance.checked_add(amount).ok_or(BankError::Overflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(BankError::Overflow)?;

        self.balance = balance;
        self.total_deposited = total_deposited;
        Ok(())
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn total_withdrawn(&self) -> i64 {
        self.total_withdrawn
    }

    pub fn total_deposited(&self) -> i64 {
        self.total_deposited
    }

    /// Deepest debt reached since the last reset
    pub fn lowest_balance(&self) -> i64 {
        self.lowest_balance
    }

    /// Check if the player currently owes money
    pub fn is_in_debt(&self) -> bool {
        self.balance < 0
    }

    /// Zero every figure
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
