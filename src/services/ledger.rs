//! Budget calculations over the expense table
//!
//! Everything here is a pure function of the loaded table and the session
//! state; nothing touches storage.

use serde::Serialize;
use std::fmt;

use crate::models::{Currency, Expense, ExpenseTable, Money, Month, SessionState};

/// Remaining budget below this share of the budget (1/5 = 20%) triggers a warning
const WARNING_DIVISOR: i64 = 5;

/// Where spending stands relative to the monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Spent more than the budget; carries the excess
    Over(Money),
    /// Not over, but less than 20% of the budget remains; carries what remains
    Warning(Money),
    /// Comfortably within budget; carries what remains
    Under(Money),
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Over(_) => "Over Budget!",
            Self::Warning(_) => "Near Budget Limit",
            Self::Under(_) => "Under Budget",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rows whose date falls in the given year and month
pub fn current_month_expenses(table: &ExpenseTable, year: i32, month: u32) -> Vec<&Expense> {
    let month = Month { year, month };
    expenses_in_month(table, month)
}

/// Rows whose date falls in `month`
pub fn expenses_in_month(table: &ExpenseTable, month: Month) -> Vec<&Expense> {
    table.iter().filter(|e| month.contains(e.date)).collect()
}

/// Sum of amounts; zero for no rows
pub fn total_spent<'a, I>(rows: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    rows.into_iter().map(|e| e.amount).sum()
}

/// Classify spending against a budget.
///
/// Over-budget is strictly `remaining < 0`; an exactly exhausted budget is a
/// warning.
pub fn budget_status(total_spent: Money, budget: Money) -> BudgetStatus {
    let remaining = budget - total_spent;

    if remaining.is_negative() {
        BudgetStatus::Over(-remaining)
    } else if remaining
        .checked_mul(WARNING_DIVISOR)
        .is_some_and(|scaled| scaled < budget)
    {
        BudgetStatus::Warning(remaining)
    } else {
        BudgetStatus::Under(remaining)
    }
}

/// Metrics shown at the top of the dashboard for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month: Month,
    pub currency: Currency,
    pub balance: Money,
    pub budget: Money,
    pub total_spent: Money,
    /// Budget minus spending; negative when over
    pub remaining: Money,
    pub status: BudgetStatus,
    pub expense_count: usize,
}

/// Build the month's summary from the table and session state
pub fn month_summary(table: &ExpenseTable, session: &SessionState, month: Month) -> MonthSummary {
    let rows = expenses_in_month(table, month);
    let total = total_spent(rows.iter().copied());

    MonthSummary {
        month,
        currency: session.currency.clone(),
        balance: session.balance,
        budget: session.monthly_budget,
        total_spent: total,
        remaining: session.monthly_budget - total,
        status: budget_status(total, session.monthly_budget),
        expense_count: rows.len(),
    }
}
