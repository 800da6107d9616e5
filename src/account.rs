//! Account and App Fund records
//!
//! Read-side inputs to the funding workflow. The `Account` is owned by the
//! external account service; this crate never writes to it. In particular,
//! the linked account's balance is NOT decremented after a simulated
//! transfer.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A linked external bank account.
///
/// The workflow reads `available_balance` only. `current_balance` includes
/// pending/uncleared amounts and is carried for completeness; spending
/// against it risks overdraft-style errors, so the validator never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub user_id: u64,
    /// Link item this account was obtained through
    pub item_id: u64,
    pub name: String,
    pub institution_name: String,
    pub available_balance: Money,
    pub current_balance: Money,
}

/// The in-app fund balance a confirmed transfer feeds.
///
/// Updated by the caller of the workflow (through the fund service) after a
/// `Confirmed` outcome, never by the workflow itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppFund {
    pub user_id: u64,
    pub balance: Money,
}

impl AppFund {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            balance: Money::ZERO,
        }
    }

    /// Add a confirmed transfer amount to the fund balance.
    pub fn credit(&mut self, amount: Money) {
        self.balance = self.balance.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_accumulates() {
        let mut fund = AppFund::new(42);
        fund.credit(Money::from_dollars(500));
        fund.credit(Money::from_cents(50));
        assert_eq!(fund.balance, Money::from_cents(50_050));
    }

    #[test]
    fn account_deserializes_with_string_balances() {
        let json = r#"{
            "account_id": "acc-001",
            "user_id": 1,
            "item_id": 9,
            "name": "Checking",
            "institution_name": "First Platypus Bank",
            "available_balance": "500.00",
            "current_balance": "510.00"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.available_balance, Money::from_dollars(500));
        assert_eq!(account.current_balance, Money::from_cents(51_000));
    }
}
