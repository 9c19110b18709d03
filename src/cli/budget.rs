//! Budget settings CLI commands
//!
//! The monthly budget, session currency and initial balance. The initial
//! balance may be changed until it is confirmed, after which it is locked.

use clap::Subcommand;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Currency, Money, SessionState, SUPPORTED_CURRENCIES};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the current budget settings
    Show,

    /// Set the monthly budget
    Set {
        /// Budget amount (e.g., "1000" or "1000.00")
        amount: String,
    },

    /// Select the currency used for new expenses
    Currency {
        /// Currency code (USD, EUR, GBP, JPY, INR)
        code: String,
    },

    /// Set the initial balance (only before it is confirmed)
    Balance {
        /// Balance amount
        amount: String,
    },

    /// Confirm the initial balance; it cannot be changed afterwards
    Confirm,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> FinTrackResult<()> {
    let mut session = storage.session.try_load()?;

    match cmd {
        BudgetCommands::Show => {
            print!("{}", format_session(&session));
            return Ok(());
        }
        BudgetCommands::Set { amount } => {
            session.monthly_budget = parse_non_negative(&amount, "Budget")?;
            println!(
                "Monthly budget set to {}",
                session.monthly_budget.format_with_symbol(&session.symbol())
            );
        }
        BudgetCommands::Currency { code } => {
            let currency = Currency::parse(&code)
                .map_err(|e| FinTrackError::Validation(e.to_string()))?;
            if !currency.is_supported() {
                let supported: Vec<&str> = SUPPORTED_CURRENCIES.iter().map(|(c, _)| *c).collect();
                return Err(FinTrackError::Validation(format!(
                    "Unsupported currency '{}'. Choose one of: {}",
                    currency,
                    supported.join(", ")
                )));
            }
            session.currency = currency;
            println!("Currency set to {}", session.currency);
        }
        BudgetCommands::Balance { amount } => {
            if session.balance_initialized {
                return Err(FinTrackError::BalanceLocked);
            }
            session.balance = parse_non_negative(&amount, "Balance")?;
            println!(
                "Initial balance set to {}. Run 'fintrack budget confirm' to lock it.",
                session.balance.format_with_symbol(&session.symbol())
            );
        }
        BudgetCommands::Confirm => {
            session.balance_initialized = true;
            println!("Initial balance set!");
        }
    }

    storage.session.save(&session)?;
    Ok(())
}

fn parse_non_negative(amount: &str, what: &str) -> FinTrackResult<Money> {
    let money = Money::parse(amount).map_err(|e| {
        FinTrackError::Validation(format!("Invalid amount format: '{}'. Error: {}", amount, e))
    })?;
    if money.decimal_places() > 2 {
        return Err(FinTrackError::Validation(format!(
            "Invalid amount '{}': use at most two decimal places",
            amount
        )));
    }
    if money.is_negative() {
        return Err(FinTrackError::Validation(format!(
            "{} cannot be negative",
            what
        )));
    }
    Ok(money)
}

fn format_session(session: &SessionState) -> String {
    let symbol = session.symbol();
    let mut output = String::from("Budget Settings\n");
    output.push_str(&format!("  Currency:        {}\n", session.currency));
    output.push_str(&format!(
        "  Monthly budget:  {}\n",
        session.monthly_budget.format_with_symbol(&symbol)
    ));
    output.push_str(&format!(
        "  Balance:         {}{}\n",
        session.balance.format_with_symbol(&symbol),
        if session.balance_initialized {
            " (confirmed)"
        } else {
            ""
        }
    ));
    output
}
