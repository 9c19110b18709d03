//! Expense service
//!
//! Records new expenses: validates the amount, appends the record to the
//! store and deducts it from the session balance.

use chrono::NaiveDate;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Expense, ExpenseCategory, ExpenseTable, Money, SessionState};
use crate::storage::ExpenseStore;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub description: Option<String>,
}

/// Service for recording and listing expenses
pub struct ExpenseService<'a, S: ExpenseStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ExpenseStore + ?Sized> ExpenseService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Record an expense in the session's currency.
    ///
    /// A non-positive amount is ignored: nothing is stored, the balance is
    /// unchanged and `Ok(None)` is returned. A storage failure is returned as
    /// an error and also leaves the balance unchanged.
    pub fn record(
        &self,
        session: &mut SessionState,
        input: CreateExpenseInput,
    ) -> FinTrackResult<Option<Expense>> {
        let mut expense = Expense::new(input.date, input.amount, input.category)
            .with_currency(session.currency.clone());

        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }

        if let Err(e) = expense.validate() {
            tracing::info!(amount = %input.amount, "ignoring expense: {}", e);
            return Ok(None);
        }

        self.store.append(expense.clone())?;
        session.apply_expense(expense.amount);

        tracing::info!(
            date = %expense.date,
            amount = %expense.amount,
            category = %expense.category,
            balance = %session.balance,
            "recorded expense"
        );

        Ok(Some(expense))
    }

    /// Undo a `record` of `expense`: drop it from the end of the store and
    /// give the amount back to the balance.
    ///
    /// Fails without changes when `expense` is no longer the last stored row.
    pub fn revert(&self, session: &mut SessionState, expense: &Expense) -> FinTrackResult<()> {
        let mut rows = self.store.try_load()?.into_rows();
        if rows.last() != Some(expense) {
            return Err(FinTrackError::Storage(
                "Cannot revert: the expense is no longer the last stored row".into(),
            ));
        }

        rows.pop();
        self.store.save(&ExpenseTable::from_rows(rows))?;
        session.balance += expense.amount;

        tracing::warn!(date = %expense.date, amount = %expense.amount, "reverted expense");
        Ok(())
    }

    /// All stored expenses, newest date first
    pub fn history(&self) -> Vec<Expense> {
        let mut rows = self.store.load().into_rows();
        // Same-day entries: most recently added first
        rows.reverse();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }
}
