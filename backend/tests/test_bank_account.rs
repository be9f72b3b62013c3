//! Tests for BankAccount model
//!
//! CRITICAL: All money values are i64 (cents)

use lottery_simulator_core_rs::{BankAccount, BankError};

#[test]
fn test_account_new() {
    let account = BankAccount::new();

    assert_eq!(account.balance(), 0);
    assert_eq!(account.total_withdrawn(), 0);
    assert_eq!(account.total_deposited(), 0);
    assert!(!account.is_in_debt());
}

#[test]
fn test_withdraw_allows_debt() {
    let mut account = BankAccount::new();

    account.withdraw(200).unwrap();
    account.withdraw(200).unwrap();

    assert_eq!(account.balance(), -400);
    assert!(account.is_in_debt());
}

#[test]
fn test_deposit_adds() {
    let mut account = BankAccount::new();

    account.deposit(1_000).unwrap();

    assert_eq!(account.balance(), 1_000);
    assert_eq!(account.total_deposited(), 1_000);
}

#[test]
fn test_zero_amounts_allowed() {
    let mut account = BankAccount::new();

    account.withdraw(0).unwrap();
    account.deposit(0).unwrap();

    assert_eq!(account.balance(), 0);
}

#[test]
fn test_negative_withdraw_rejected() {
    let mut account = BankAccount::new();
    account.deposit(500).unwrap();

    let result = account.withdraw(-1);

    assert_eq!(result, Err(BankError::InvalidAmount { amount: -1 }));
    assert_eq!(account.balance(), 500); // Balance unchanged
}

#[test]
fn test_negative_deposit_rejected() {
    let mut account = BankAccount::new();

    let result = account.deposit(-100);

    assert_eq!(result, Err(BankError::InvalidAmount { amount: -100 }));
    assert_eq!(account.balance(), 0);
    assert_eq!(account.total_deposited(), 0);
}

#[test]
fn test_withdraw_overflow_rejected() {
    let mut account = BankAccount::new();
    account.withdraw(i64::MAX).unwrap();

    assert_eq!(account.withdraw(2), Err(BankError::Overflow));
    assert_eq!(account.balance(), -i64::MAX);
}

#[test]
fn test_balance_equals_deposits_minus_withdrawals() {
    let mut account = BankAccount::new();

    for i in 0..10_000i64 {
        account.withdraw(200).unwrap();
        if i % 37 == 0 {
            account.deposit(3_000).unwrap();
        }
    }

    assert_eq!(account.total_withdrawn(), 2_000_000);
    assert_eq!(account.total_deposited(), 271 * 3_000);
    assert_eq!(
        account.balance(),
        account.total_deposited() - account.total_withdrawn()
    );
}

#[test]
fn test_reset_clears_everything() {
    let mut account = BankAccount::new();
    account.withdraw(5_000).unwrap();
    account.deposit(100).unwrap();

    account.reset();

    assert_eq!(account, BankAccount::new());
    assert_eq!(account.lowest_balance(), 0);
}
