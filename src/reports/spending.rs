//! Spending Report
//!
//! Breaks one month of spending down by category and by day, alongside the
//! month's budget summary. This is what the dashboard charts are drawn from.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Expense, ExpenseCategory, ExpenseTable, Money, Month, SessionState};
use crate::services::ledger::{expenses_in_month, month_summary, MonthSummary};

/// Spending total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of the month's total spending, 0-100
    pub percentage: f64,
}

/// Spending total for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub total: Money,
}

/// Per-category totals, largest first
pub fn category_distribution<'a, I>(rows: I) -> Vec<CategorySpending>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut by_category: HashMap<ExpenseCategory, (Money, usize)> = HashMap::new();
    let mut grand_total = Money::zero();

    for expense in rows {
        let entry = by_category
            .entry(expense.category)
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
        grand_total += expense.amount;
    }

    let mut result: Vec<CategorySpending> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategorySpending {
            category,
            total,
            count,
            percentage: if grand_total.is_zero() {
                0.0
            } else {
                (total.to_f64() / grand_total.to_f64()) * 100.0
            },
        })
        .collect();

    result.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    result
}

/// Per-day totals in date order
pub fn daily_spending<'a, I>(rows: I) -> Vec<DailySpending>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in rows {
        *by_day.entry(expense.date).or_default() += expense.amount;
    }

    by_day
        .into_iter()
        .map(|(date, total)| DailySpending { date, total })
        .collect()
}

/// Spending Report for one month
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub summary: MonthSummary,
    pub categories: Vec<CategorySpending>,
    pub daily: Vec<DailySpending>,
}

impl SpendingReport {
    /// Generate the report for `month`
    pub fn generate(table: &ExpenseTable, session: &SessionState, month: Month) -> Self {
        let rows = expenses_in_month(table, month);

        Self {
            summary: month_summary(table, session, month),
            categories: category_distribution(rows.iter().copied()),
            daily: daily_spending(rows.iter().copied()),
        }
    }

    /// Whether the month has no expenses at all
    pub fn is_empty(&self) -> bool {
        self.summary.expense_count == 0
    }
}
