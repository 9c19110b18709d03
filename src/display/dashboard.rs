//! Dashboard display formatting
//!
//! Renders a month's spending report as metrics, a budget alert and two text
//! charts: category distribution and daily spending.

use super::report::{double_separator, format_bar, format_percentage, separator};
use crate::reports::SpendingReport;
use crate::services::BudgetStatus;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 24;

/// Format the full dashboard for a month
pub fn format_dashboard(report: &SpendingReport) -> String {
    let summary = &report.summary;
    let symbol = summary.currency.symbol();
    let mut output = String::new();

    output.push_str(&format!("Expense Dashboard - {}\n", summary.month));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "Current Balance:   {}\n",
        summary.balance.format_with_symbol(&symbol)
    ));
    output.push_str(&format!(
        "Total Spent:       {}\n",
        summary.total_spent.format_with_symbol(&symbol)
    ));
    output.push_str(&format!(
        "Monthly Budget:    {}\n",
        summary.budget.format_with_symbol(&symbol)
    ));
    output.push_str(&format!(
        "Remaining Budget:  {} ({})\n",
        summary.remaining.format_with_symbol(&symbol),
        summary.status
    ));

    if let Some(alert) = format_budget_alert(&summary.status, &symbol) {
        output.push('\n');
        output.push_str(&alert);
        output.push('\n');
    }

    output.push('\n');
    output.push_str("Category Distribution\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if report.is_empty() {
        output.push_str("No expenses recorded this month.\n");
    } else {
        let max = report
            .categories
            .first()
            .map(|c| c.total.to_f64())
            .unwrap_or(0.0);
        for row in &report.categories {
            output.push_str(&format!(
                "{:<15} {} {:>12} {:>5}\n",
                row.category.name(),
                format_bar(row.total.to_f64(), max, BAR_WIDTH),
                row.total.format_with_symbol(&symbol),
                format_percentage(row.percentage)
            ));
        }
    }

    output.push('\n');
    output.push_str("Daily Expenses\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if report.is_empty() {
        output.push_str("No expenses recorded this month.\n");
    } else {
        let max = report
            .daily
            .iter()
            .map(|d| d.total)
            .max()
            .unwrap_or_default()
            .to_f64();
        for day in &report.daily {
            output.push_str(&format!(
                "{} {} {:>12}\n",
                day.date.format("%Y-%m-%d"),
                format_bar(day.total.to_f64(), max, BAR_WIDTH),
                day.total.format_with_symbol(&symbol)
            ));
        }
    }

    output
}

/// Alert line for over-budget or nearly-exhausted budgets
pub fn format_budget_alert(status: &BudgetStatus, symbol: &str) -> Option<String> {
    match status {
        BudgetStatus::Over(excess) => Some(format!(
            "Alert: You have exceeded your monthly budget by {}!",
            excess.format_with_symbol(symbol)
        )),
        BudgetStatus::Warning(_) => {
            Some("Warning: You are close to exceeding your monthly budget!".to_string())
        }
        BudgetStatus::Under(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, ExpenseTable, Money, Month, SessionState};
    use chrono::NaiveDate;

    fn report_for(rows: Vec<Expense>) -> SpendingReport {
        SpendingReport::generate(
            &ExpenseTable::from_rows(rows),
            &SessionState::default(),
            Month::new(2024, 5).unwrap(),
        )
    }

    fn expense(day: u32, cents: i64, category: ExpenseCategory) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            Money::from_cents(cents),
            category,
        )
    }

    #[test]
    fn test_empty_month() {
        let output = format_dashboard(&report_for(Vec::new()));
        assert!(output.contains("Expense Dashboard - 2024-05"));
        assert!(output.contains("Total Spent:       $0.00"));
        assert!(output.contains("Under Budget"));
        assert!(output.contains("No expenses recorded this month."));
    }

    #[test]
    fn test_over_budget_shows_alert() {
        let output = format_dashboard(&report_for(vec![
            expense(1, 20_000, ExpenseCategory::Food),
            expense(2, 85_000, ExpenseCategory::Shopping),
        ]));

        assert!(output.contains("Total Spent:       $1050.00"));
        assert!(output.contains("Remaining Budget:  -$50.00 (Over Budget!)"));
        assert!(output.contains("exceeded your monthly budget by $50.00"));
        assert!(output.contains("Shopping"));
        assert!(output.contains("2024-05-02"));
    }

    #[test]
    fn test_warning_alert() {
        let alert = format_budget_alert(&BudgetStatus::Warning(Money::from_cents(100)), "$");
        assert!(alert.unwrap().contains("close to exceeding"));
        assert!(format_budget_alert(&BudgetStatus::Under(Money::zero()), "$").is_none());
    }
}
