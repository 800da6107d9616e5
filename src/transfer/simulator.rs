//! Transfer Simulator
//!
//! Stand-in for the settlement rail. Nothing here contacts a real bank: the
//! ACH path logs the simulated movement and echoes the amount back as a
//! confirmation, and the processor path is an unfinished extension point
//! that fails fast.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::account::Account;
use crate::money::Money;

use super::error::SimulateError;

/// Transfer ID - ULID-based unique identifier
///
/// Monotonic and sortable, no coordination needed to generate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(ulid::Ulid);

impl TransferId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransferId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(ulid::Ulid::from_string(s)?))
    }
}

/// Where a simulated transfer settles.
///
/// Which kind is in play is a deployment decision, injected at construction
/// time so both branches are testable; it never changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// ACH rail, using routing/account numbers obtained from an external
    /// auth step
    Ach {
        routing_number: String,
        account_number: String,
    },
    /// Third-party payment processor funding source
    Processor {
        funding_source_url: String,
        item_id: u64,
    },
}

impl Destination {
    pub fn kind(&self) -> &'static str {
        match self {
            Destination::Ach { .. } => "ACH",
            Destination::Processor { .. } => "PROCESSOR",
        }
    }
}

/// Confirmation of a simulated transfer. Echoes the validated amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfirmation {
    pub transfer_id: TransferId,
    pub amount: Money,
    /// Source account the movement was simulated from
    pub account_id: String,
    pub completed_at: DateTime<Utc>,
}

/// The (stubbed) execution of an external transfer.
#[derive(Debug, Clone)]
pub struct TransferSimulator {
    destination: Destination,
}

impl TransferSimulator {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Simulate moving `amount` out of `account` toward the configured
    /// destination.
    ///
    /// ACH always succeeds without any network call; the only trace a
    /// "settlement" leaves is the log record. The processor branch must be
    /// completed by whoever finishes the workflow and fails fast until then.
    pub fn simulate(
        &self,
        amount: Money,
        account: &Account,
    ) -> Result<TransferConfirmation, SimulateError> {
        match &self.destination {
            Destination::Ach { .. } => {
                let confirmation = TransferConfirmation {
                    transfer_id: TransferId::new(),
                    amount,
                    account_id: account.account_id.clone(),
                    completed_at: Utc::now(),
                };
                info!(
                    transfer_id = %confirmation.transfer_id,
                    account_id = %account.account_id,
                    amount = %amount,
                    rail = self.destination.kind(),
                    "Simulated ACH transfer"
                );
                Ok(confirmation)
            }
            Destination::Processor {
                funding_source_url,
                item_id,
            } => {
                // TODO: send the transfer request to the processor using
                // funding_source_url + item_id once that rail is wired up.
                info!(
                    funding_source_url = %funding_source_url,
                    item_id = item_id,
                    amount = %amount,
                    "Processor transfer requested but not implemented"
                );
                Err(SimulateError::ProcessorUnimplemented)
            }
        }
    }
}
