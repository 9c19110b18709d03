//! Expense CLI commands
//!
//! Implements the add-expense form and the expense history listing.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_history;
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{ExpenseCategory, Money};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Fractional digits accepted for a typed amount
const MAX_INPUT_DECIMALS: u32 = 2;

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12.50"); must be greater than zero
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category (Education, Food, Housing, Transportation, Entertainment,
    /// Utilities, Shopping, Other)
    #[arg(short, long, default_value = "Other")]
    pub category: String,
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Arguments for listing past expenses
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of expenses to show (newest first); all when omitted
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> FinTrackResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        FinTrackError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.50'. Error: {}",
            args.amount, e
        ))
    })?;
    if amount.decimal_places() > MAX_INPUT_DECIMALS {
        return Err(FinTrackError::Validation(format!(
            "Invalid amount '{}': use at most two decimal places",
            args.amount
        )));
    }

    let category = args
        .category
        .parse::<ExpenseCategory>()
        .map_err(|e| FinTrackError::Validation(e.to_string()))?;

    let date = match args.date {
        Some(date_str) => parse_date_arg(&date_str)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut session = storage.session.try_load()?;
    let service = ExpenseService::new(&storage.expenses);

    let input = CreateExpenseInput {
        date,
        amount,
        category,
        description: args.description,
    };

    let Some(expense) = service.record(&mut session, input)? else {
        println!("Amount must be greater than zero. No expense was recorded.");
        return Ok(());
    };

    // The row and the balance must change together
    if let Err(save_err) = storage.session.save(&session) {
        return Err(match service.revert(&mut session, &expense) {
            Ok(()) => save_err,
            Err(revert_err) => FinTrackError::Storage(format!(
                "Expense was stored but the balance could not be updated ({}); \
                 removing the expense also failed: {}",
                save_err, revert_err
            )),
        });
    }

    println!("Expense added successfully: {}", expense);
    println!(
        "Current balance: {}",
        session.balance.format_with_symbol(&session.symbol())
    );

    Ok(())
}

/// Handle `history`
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    args: HistoryArgs,
) -> FinTrackResult<()> {
    let service = ExpenseService::new(&storage.expenses);
    let mut expenses = service.history();

    if let Some(limit) = args.limit {
        expenses.truncate(limit);
    }

    print!("{}", format_expense_history(&expenses, &settings.date_format));
    Ok(())
}

fn parse_date_arg(date_str: &str) -> FinTrackResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        FinTrackError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}
