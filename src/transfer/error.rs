//! Transfer Error Types
//!
//! Two layers, matching the propagation policy: the validator and the
//! workflow speak `RejectReason` (expected, user-correctable outcomes with
//! their own UI copy), while the simulator speaks `SimulateError`. The
//! workflow is the only place a `SimulateError` is mapped to a reason, and
//! it always maps to the generic one.

use thiserror::Error;

use crate::money::{Money, format_usd};

/// Why a transfer request was rejected.
///
/// These are outcomes, not faults: each carries specific user-facing copy
/// and the whole workflow stays resumable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Requested amount was zero or negative (including unparseable input,
    /// which reaches validation as zero)
    NonPositiveAmount,

    /// Requested amount exceeds the account's available balance. Carries the
    /// amount so the error copy can echo it back formatted.
    InsufficientFunds { amount: Money },

    /// The simulator failed for a reason unrelated to amount validation.
    /// Not diagnosable further from the UI's point of view.
    Generic,
}

impl RejectReason {
    /// Stable code for logs and structured responses
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            RejectReason::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            RejectReason::Generic => "GENERIC_FAILURE",
        }
    }

    /// User-facing error copy for the rejection view.
    pub fn message(&self) -> String {
        match self {
            RejectReason::NonPositiveAmount => {
                "You must enter an amount greater than $0.00".to_string()
            }
            RejectReason::InsufficientFunds { amount } => format!(
                "We are unable to verify {} in your bank account.",
                format_usd(*amount)
            ),
            RejectReason::Generic => {
                "Oops! Something went wrong with the transfer. Try again later.".to_string()
            }
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Simulator failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulateError {
    /// The processor rail is a deliberate extension point: whoever finishes
    /// the workflow wires the real request. Failing fast beats silently
    /// confirming a transfer that never happened.
    #[error("Processor transfers are not implemented yet")]
    ProcessorUnimplemented,
}

impl SimulateError {
    pub fn code(&self) -> &'static str {
        match self {
            SimulateError::ProcessorUnimplemented => "PROCESSOR_UNIMPLEMENTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_codes() {
        assert_eq!(RejectReason::NonPositiveAmount.code(), "NON_POSITIVE_AMOUNT");
        assert_eq!(
            RejectReason::InsufficientFunds {
                amount: Money::from_dollars(1)
            }
            .code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(RejectReason::Generic.code(), "GENERIC_FAILURE");
        assert_eq!(
            SimulateError::ProcessorUnimplemented.code(),
            "PROCESSOR_UNIMPLEMENTED"
        );
    }

    #[test]
    fn messages_are_specific() {
        assert_eq!(
            RejectReason::NonPositiveAmount.message(),
            "You must enter an amount greater than $0.00"
        );
        assert_eq!(
            RejectReason::InsufficientFunds {
                amount: Money::from_cents(50_001)
            }
            .message(),
            "We are unable to verify $500.01 in your bank account."
        );
        assert!(RejectReason::Generic.message().contains("Try again later"));
    }
}
