//! Amount Validator
//!
//! Pure decision: is a requested amount permissible against the account's
//! available balance? No side effects, no clock, no I/O.

use crate::money::Money;

use super::error::RejectReason;

/// Validate a requested transfer amount against the available balance.
///
/// `Ok(())` iff `amount > 0` and `amount <= available_balance` (boundary
/// inclusive). Non-positive amounts are rejected first; since a balance is
/// never negative, the two reasons cannot both apply.
///
/// The balance must be the account's *available* balance. The current
/// balance includes uncleared amounts and validating against it invites
/// overdraft-style errors.
pub fn validate_amount(amount: Money, available_balance: Money) -> Result<(), RejectReason> {
    if !amount.is_positive() {
        return Err(RejectReason::NonPositiveAmount);
    }
    if amount > available_balance {
        return Err(RejectReason::InsufficientFunds { amount });
    }
    Ok(())
}
