//! pattern_funding - Funding Step Demo
//!
//! Thin presentation driver over the transfer workflow. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│ Workflow  │───▶│ Simulator │───▶│  Views   │
//! │  (yaml)  │    │ (validate)│    │ (ACH stub)│    │ (stdout) │
//! └──────────┘    └───────────┘    └───────────┘    └──────────┘
//! ```
//!
//! All decisions live in the workflow; this loop only renders the view for
//! the current state and feeds user actions back in. After a confirmed
//! outcome it credits the app fund through the fund service, as the
//! surrounding app would.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use pattern_funding::logging::init_logging;
use pattern_funding::{
    Account, AppConfig, InMemoryFundService, Money, TransferSimulator, TransferWorkflow,
    WorkflowState, format_usd,
};
use pattern_funding::fund_service::FundService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--env" && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read stdin")?;
    Ok(line.trim().to_string())
}

fn seed_account() -> Account {
    Account {
        account_id: "acc-checking-0001".to_string(),
        user_id: 1,
        item_id: 1,
        name: "Checking".to_string(),
        institution_name: "First Platypus Bank".to_string(),
        available_balance: Money::from_dollars(500),
        current_balance: Money::from_dollars(510),
    }
}

fn main() -> Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    let mut service = InMemoryFundService::new();
    service.add_account(seed_account());

    let account = service.fetch_account("acc-checking-0001")?;
    let simulator = TransferSimulator::new(config.funding.destination());
    let mut workflow = TransferWorkflow::new(&account, simulator);

    println!("=== Transfer funds to your account ===");

    loop {
        match workflow.state().clone() {
            WorkflowState::AwaitingInput => {
                println!(
                    "\nAvailable balance at {}: {}",
                    account.institution_name,
                    format_usd(workflow.available_balance())
                );
                let input = read_line("Enter amount to transfer (or 'back'): ")?;
                if input.eq_ignore_ascii_case("back") {
                    workflow.acknowledge();
                } else {
                    workflow.submit(&input);
                }
            }
            WorkflowState::Confirmed(confirmation) => {
                println!("\n--- Transfer Confirmed ---");
                if let Some(msg) = workflow.confirmation_message() {
                    println!("{msg}");
                }
                // the caller, not the workflow, updates the app fund
                let fund = service.update_fund_balance(account.user_id, confirmation.amount)?;
                println!("App fund balance: {}", format_usd(fund.balance));
                read_line("[Enter] Done ")?;
                workflow.acknowledge();
            }
            WorkflowState::Rejected(reason) => {
                println!("\n--- Transfer Error ---");
                println!("{}", reason.message());
                read_line("[Enter] Back ")?;
                workflow.acknowledge();
            }
            WorkflowState::Closed => break,
        }
    }

    println!("Goodbye.");
    Ok(())
}
