//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add_command, handle_history_command, AddArgs, HistoryArgs};
pub use report::{handle_dashboard_command, DashboardArgs};
