//! Fund Transfer Workflow
//!
//! The validation-and-confirmation core of the account-funding step: check a
//! requested amount against the linked account's available balance, simulate
//! the transfer, and surface exactly one outcome view.
//!
//! # State Machine
//!
//! ```text
//! AWAITING_INPUT --submit--> CONFIRMED | REJECTED --acknowledge--> CLOSED
//! ```
//!
//! # Invariants
//!
//! 1. A `Confirmed` amount passed validation against the balance as read
//!    when the workflow opened; there is no re-check
//! 2. One state is live at a time; transitions are wholesale replacements
//! 3. The linked `Account` is never mutated - no balance decrements after a
//!    simulated transfer

pub mod error;
pub mod simulator;
pub mod validate;
pub mod workflow;

// Re-exports for convenience
pub use error::{RejectReason, SimulateError};
pub use simulator::{Destination, TransferConfirmation, TransferId, TransferSimulator};
pub use validate::validate_amount;
pub use workflow::{TransferWorkflow, WorkflowState};
