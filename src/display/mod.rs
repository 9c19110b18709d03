//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, reports and the dashboard
//! for terminal display.

pub mod category;
pub mod dashboard;
pub mod expense;
pub mod report;

pub use category::format_category_list;
pub use dashboard::{format_budget_alert, format_dashboard};
pub use expense::{format_expense_history, format_expense_row};
