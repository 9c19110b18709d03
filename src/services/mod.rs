//! Service layer for FinTrack
//!
//! The service layer provides business logic on top of the storage layer:
//! recording expenses and deriving budget metrics.

pub mod expense;
pub mod ledger;

pub use expense::{CreateExpenseInput, ExpenseService};
pub use ledger::{
    budget_status, current_month_expenses, expenses_in_month, month_summary, total_spent,
    BudgetStatus, MonthSummary,
};
