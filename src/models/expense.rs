//! Expense records and the expense table
//!
//! An expense is one spending event. Expenses are only ever appended; nothing
//! in the application edits or removes a stored record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, ExpenseCategory, Money};

/// Column names of the expense table, in file order
pub const EXPENSE_COLUMNS: [&str; 5] = ["Date", "Amount", "Category", "Description", "Currency"];

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Amount spent; always positive once stored
    pub amount: Money,

    pub category: ExpenseCategory,

    /// Free-text label, may be empty
    #[serde(default)]
    pub description: String,

    /// Currency the amount was entered in
    #[serde(default)]
    pub currency: Currency,
}

impl Expense {
    /// Create a new expense in USD with no description
    pub fn new(date: NaiveDate, amount: Money, category: ExpenseCategory) -> Self {
        Self {
            date,
            amount,
            category,
            description: String::new(),
            currency: Currency::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount.format_with_symbol(&self.currency.symbol()),
            self.category,
            self.currency
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// The full set of stored expenses, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseTable {
    rows: Vec<Expense>,
}

impl ExpenseTable {
    /// An empty table with no rows
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Expense>) -> Self {
        Self { rows }
    }

    /// Column names, in file order
    pub fn columns(&self) -> &'static [&'static str] {
        &EXPENSE_COLUMNS
    }

    pub fn rows(&self) -> &[Expense] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add a row at the end of the table
    pub fn push(&mut self, expense: Expense) {
        self.rows.push(expense);
    }

    pub fn into_rows(self) -> Vec<Expense> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ExpenseTable {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
