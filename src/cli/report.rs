//! Report CLI commands
//!
//! The dashboard: this month's metrics, budget alert and spending charts.

use clap::Args;

use crate::display::format_dashboard;
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::Month;
use crate::reports::SpendingReport;
use crate::storage::{ExpenseStore, Storage};

/// Arguments for the dashboard
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle `dashboard`
pub fn handle_dashboard_command(storage: &Storage, args: DashboardArgs) -> FinTrackResult<()> {
    let month = match args.month {
        Some(m) => Month::parse(&m).map_err(|e| FinTrackError::Validation(e.to_string()))?,
        None => Month::current(),
    };

    let session = storage.session.load();
    let table = storage.expenses.load();
    let report = SpendingReport::generate(&table, &session, month);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_dashboard(&report));
    }

    Ok(())
}
