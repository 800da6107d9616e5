//! Fund Service Seam
//!
//! The workflow's external collaborator for account reads and app-fund
//! updates. The workflow itself never calls this; the caller fetches the
//! account before opening the workflow and credits the fund after a
//! confirmed outcome.
//!
//! An in-memory implementation stands in for the real service, the same way
//! this sample app stubs its banking rails.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::account::{Account, AppFund};
use crate::money::Money;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundServiceError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(u64),
}

/// Account reads and app-fund writes, as the surrounding app exposes them.
pub trait FundService {
    /// Look up a linked account by id.
    fn fetch_account(&self, account_id: &str) -> Result<Account, FundServiceError>;

    /// Credit a confirmed transfer amount to the user's app fund and return
    /// the updated fund record.
    fn update_fund_balance(
        &mut self,
        user_id: u64,
        amount: Money,
    ) -> Result<AppFund, FundServiceError>;
}

/// In-memory fund service for the demo binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryFundService {
    accounts: HashMap<String, Account>,
    funds: HashMap<u64, AppFund>,
}

impl InMemoryFundService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a linked account and make sure its user has a fund record.
    pub fn add_account(&mut self, account: Account) {
        self.funds
            .entry(account.user_id)
            .or_insert_with(|| AppFund::new(account.user_id));
        self.accounts.insert(account.account_id.clone(), account);
    }

    pub fn fund(&self, user_id: u64) -> Option<&AppFund> {
        self.funds.get(&user_id)
    }
}

impl FundService for InMemoryFundService {
    fn fetch_account(&self, account_id: &str) -> Result<Account, FundServiceError> {
        self.accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| FundServiceError::AccountNotFound(account_id.to_string()))
    }

    fn update_fund_balance(
        &mut self,
        user_id: u64,
        amount: Money,
    ) -> Result<AppFund, FundServiceError> {
        let fund = self
            .funds
            .get_mut(&user_id)
            .ok_or(FundServiceError::UserNotFound(user_id))?;
        fund.credit(amount);
        debug!(user_id, amount = %amount, balance = %fund.balance, "App fund credited");
        Ok(fund.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking(account_id: &str, user_id: u64) -> Account {
        Account {
            account_id: account_id.to_string(),
            user_id,
            item_id: 1,
            name: "Checking".to_string(),
            institution_name: "First Platypus Bank".to_string(),
            available_balance: Money::from_dollars(500),
            current_balance: Money::from_dollars(510),
        }
    }

    #[test]
    fn fetch_and_update_round() {
        let mut svc = InMemoryFundService::new();
        svc.add_account(checking("acc-001", 7));

        let account = svc.fetch_account("acc-001").unwrap();
        assert_eq!(account.available_balance, Money::from_dollars(500));

        let fund = svc.update_fund_balance(7, Money::from_dollars(100)).unwrap();
        assert_eq!(fund.balance, Money::from_dollars(100));
        assert_eq!(svc.fund(7).unwrap().balance, Money::from_dollars(100));
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut svc = InMemoryFundService::new();
        assert_eq!(
            svc.fetch_account("nope"),
            Err(FundServiceError::AccountNotFound("nope".to_string()))
        );
        assert_eq!(
            svc.update_fund_balance(99, Money::from_dollars(1)),
            Err(FundServiceError::UserNotFound(99))
        );
    }
}
