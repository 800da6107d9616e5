//! pattern_funding - Demo Banking App Funding Workflow
//!
//! The account-funding step of a demo banking app: request a transfer from a
//! linked external account into the in-app fund balance, validate the amount
//! against the available balance, simulate the transfer, and report exactly
//! one of three outcomes.
//!
//! No real money moves anywhere in this crate.
//!
//! # Modules
//!
//! - [`money`] - Cents-based amounts, strict/lenient parsing, `$` formatting
//! - [`account`] - Linked `Account` (read-only) and the `AppFund` it feeds
//! - [`fund_service`] - External collaborator seam for account/fund records
//! - [`transfer`] - Validator, simulator and workflow state machine
//! - [`config`] - Per-environment yaml config, funding destination flag
//! - [`logging`] - Rolling-file tracing setup

pub mod account;
pub mod config;
pub mod fund_service;
pub mod logging;
pub mod money;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AppFund};
pub use config::{AppConfig, DestinationKind, FundingConfig};
pub use fund_service::{FundService, FundServiceError, InMemoryFundService};
pub use money::{Money, MoneyError, format_usd};
pub use transfer::{
    Destination, RejectReason, SimulateError, TransferConfirmation, TransferId, TransferSimulator,
    TransferWorkflow, WorkflowState, validate_amount,
};
