//! Core data models for FinTrack
//!
//! Expenses, the expense table, money, categories, currencies, calendar
//! months and the user's session state.

pub mod category;
pub mod currency;
pub mod expense;
pub mod money;
pub mod period;
pub mod session;

pub use category::ExpenseCategory;
pub use currency::{Currency, SUPPORTED_CURRENCIES};
pub use expense::{Expense, ExpenseTable, ExpenseValidationError, EXPENSE_COLUMNS};
pub use money::Money;
pub use period::Month;
pub use session::SessionState;
