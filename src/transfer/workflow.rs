//! Transfer Workflow Controller
//!
//! The single source of truth for which view of the funding step is live.
//!
//! # State Machine
//!
//! ```text
//! AWAITING_INPUT --submit--> CONFIRMED --acknowledge--> CLOSED
//!        |    \--submit--->  REJECTED --acknowledge--> CLOSED
//!        \------acknowledge (abandon)----------------> CLOSED
//! ```
//!
//! Transitions replace the state wholesale; there is no partial update and
//! no return to `AwaitingInput` within a session. The available balance is
//! read once when the workflow opens and never re-checked.

use tracing::{info, warn};

use crate::account::Account;
use crate::money::{Money, format_usd};

use super::error::RejectReason;
use super::simulator::{TransferConfirmation, TransferSimulator};
use super::validate::validate_amount;

/// Workflow states. Exactly one is live at any time, which is what makes
/// "exactly one view" a type-level fact instead of a pile of booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    /// Capture form is showing; no request submitted yet
    AwaitingInput,
    /// Terminal for the current request: transfer simulated successfully
    Confirmed(TransferConfirmation),
    /// Terminal for the current request: request rejected
    Rejected(RejectReason),
    /// Workflow exited; the caller closes the transfer view
    Closed,
}

impl WorkflowState {
    /// Terminal for the current request (a user action still follows)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Confirmed(_) | WorkflowState::Rejected(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::AwaitingInput => "AWAITING_INPUT",
            WorkflowState::Confirmed(_) => "CONFIRMED",
            WorkflowState::Rejected(_) => "REJECTED",
            WorkflowState::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orchestrates one funding attempt: raw amount in, one of three views out.
///
/// Owns the state; the presentation layer only reads it and feeds user
/// actions back in. Never mutates the `Account` it was opened with.
#[derive(Debug)]
pub struct TransferWorkflow {
    account: Account,
    /// Available balance snapshot, read once when the workflow opens
    available_balance: Money,
    simulator: TransferSimulator,
    state: WorkflowState,
}

impl TransferWorkflow {
    pub fn new(account: &Account, simulator: TransferSimulator) -> Self {
        Self {
            account: account.clone(),
            available_balance: account.available_balance,
            simulator,
            state: WorkflowState::AwaitingInput,
        }
    }

    #[inline]
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    #[inline]
    pub fn available_balance(&self) -> Money {
        self.available_balance
    }

    /// Submit a raw user-entered amount from the capture form.
    ///
    /// Runs the validator against the balance snapshot; on success runs the
    /// simulator and lands in `Confirmed`, otherwise in `Rejected` with the
    /// specific reason. A simulator failure maps to the generic rejection.
    /// Only legal from `AwaitingInput`; anywhere else it is a logged no-op.
    pub fn submit(&mut self, raw_amount: &str) -> &WorkflowState {
        if self.state != WorkflowState::AwaitingInput {
            warn!(state = %self.state, "Submit ignored: workflow is not awaiting input");
            return &self.state;
        }

        let amount = Money::from_input(raw_amount);
        self.state = match validate_amount(amount, self.available_balance) {
            Ok(()) => match self.simulator.simulate(amount, &self.account) {
                Ok(confirmation) => {
                    info!(
                        transfer_id = %confirmation.transfer_id,
                        amount = %amount,
                        "Transfer confirmed"
                    );
                    WorkflowState::Confirmed(confirmation)
                }
                Err(e) => {
                    warn!(code = e.code(), error = %e, "Transfer simulation failed");
                    WorkflowState::Rejected(RejectReason::Generic)
                }
            },
            Err(reason) => {
                info!(code = reason.code(), amount = %amount, "Transfer request rejected");
                WorkflowState::Rejected(reason)
            }
        };
        &self.state
    }

    /// Dismiss the current view and exit the workflow.
    ///
    /// Legal from any state: "Done" on the confirmation, "Back" on the error
    /// view, or abandoning the capture form. Nothing external was mutated,
    /// so abandonment needs no compensation. Returns `true` when this call
    /// closed the workflow; a second acknowledgment is a no-op returning
    /// `false`.
    pub fn acknowledge(&mut self) -> bool {
        if self.state == WorkflowState::Closed {
            return false;
        }
        info!(from = %self.state, "Workflow closed");
        self.state = WorkflowState::Closed;
        true
    }

    /// Copy for the confirmation view. `None` unless the state is
    /// `Confirmed`.
    pub fn confirmation_message(&self) -> Option<String> {
        match &self.state {
            WorkflowState::Confirmed(confirmation) => Some(format!(
                "You have successfully transferred {} from {} to your app fund.",
                format_usd(confirmation.amount),
                self.account.institution_name
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::simulator::Destination;

    fn account(available_cents: i64) -> Account {
        Account {
            account_id: "acc-001".to_string(),
            user_id: 1,
            item_id: 1,
            name: "Checking".to_string(),
            institution_name: "First Platypus Bank".to_string(),
            available_balance: Money::from_cents(available_cents),
            current_balance: Money::from_cents(available_cents + 1_000),
        }
    }

    fn ach_workflow(available_cents: i64) -> TransferWorkflow {
        let destination = Destination::Ach {
            routing_number: "021000021".to_string(),
            account_number: "1111222233330000".to_string(),
        };
        TransferWorkflow::new(&account(available_cents), TransferSimulator::new(destination))
    }

    #[test]
    fn starts_awaiting_input() {
        let wf = ach_workflow(50_000);
        assert_eq!(*wf.state(), WorkflowState::AwaitingInput);
        assert!(!wf.state().is_terminal());
    }

    #[test]
    fn full_balance_transfer_confirms() {
        let mut wf = ach_workflow(50_000);
        let state = wf.submit("500.00");
        match state {
            WorkflowState::Confirmed(c) => assert_eq!(c.amount, Money::from_cents(50_000)),
            other => panic!("expected Confirmed, got {other}"),
        }
        let msg = wf.confirmation_message().unwrap();
        assert_eq!(
            msg,
            "You have successfully transferred $500.00 from First Platypus Bank to your app fund."
        );
    }

    #[test]
    fn one_cent_over_is_rejected() {
        let mut wf = ach_workflow(50_000);
        assert_eq!(
            *wf.submit("500.01"),
            WorkflowState::Rejected(RejectReason::InsufficientFunds {
                amount: Money::from_cents(50_001)
            })
        );
        assert!(wf.confirmation_message().is_none());
    }

    #[test]
    fn zero_and_negative_are_non_positive() {
        let mut wf = ach_workflow(50_000);
        assert_eq!(
            *wf.submit("0"),
            WorkflowState::Rejected(RejectReason::NonPositiveAmount)
        );

        let mut wf = ach_workflow(50_000);
        assert_eq!(
            *wf.submit("-10"),
            WorkflowState::Rejected(RejectReason::NonPositiveAmount)
        );
    }

    #[test]
    fn garbage_input_reads_as_zero() {
        let mut wf = ach_workflow(50_000);
        assert_eq!(
            *wf.submit("five hundred"),
            WorkflowState::Rejected(RejectReason::NonPositiveAmount)
        );
    }

    #[test]
    fn processor_destination_maps_to_generic_rejection() {
        let account = account(50_000);
        let simulator = TransferSimulator::new(Destination::Processor {
            funding_source_url: "https://api.example.com/funding-sources/abc".to_string(),
            item_id: 7,
        });
        let mut wf = TransferWorkflow::new(&account, simulator);
        assert_eq!(
            *wf.submit("50.00"),
            WorkflowState::Rejected(RejectReason::Generic)
        );
    }

    #[test]
    fn submit_after_terminal_is_a_no_op() {
        let mut wf = ach_workflow(50_000);
        wf.submit("100.00");
        let before = wf.state().clone();
        wf.submit("1.00");
        assert_eq!(*wf.state(), before);
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let mut wf = ach_workflow(50_000);
        wf.submit("100.00");
        assert!(wf.acknowledge());
        assert_eq!(*wf.state(), WorkflowState::Closed);
        assert!(!wf.acknowledge());
        assert_eq!(*wf.state(), WorkflowState::Closed);
    }

    #[test]
    fn abandoning_the_form_closes_the_workflow() {
        let mut wf = ach_workflow(50_000);
        assert!(wf.acknowledge());
        assert_eq!(*wf.state(), WorkflowState::Closed);
        // and nothing can be submitted afterwards
        wf.submit("10.00");
        assert_eq!(*wf.state(), WorkflowState::Closed);
    }

    #[test]
    fn balance_is_snapshotted_once() {
        let mut acct = account(50_000);
        let destination = Destination::Ach {
            routing_number: "021000021".to_string(),
            account_number: "1111222233330000".to_string(),
        };
        let mut wf = TransferWorkflow::new(&acct, TransferSimulator::new(destination));
        // the external service may move the balance; the open workflow
        // validates against what it read
        acct.available_balance = Money::ZERO;
        assert!(matches!(
            wf.submit("500.00"),
            WorkflowState::Confirmed(_)
        ));
    }
}
