//! Expense display formatting
//!
//! Formats the expense history as a register for terminal display.

use super::report::truncate;
use crate::models::Expense;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, date_format: &str) -> String {
    let description = if expense.description.is_empty() {
        "-".to_string()
    } else {
        truncate(&expense.description, 24)
    };

    format!(
        "{:10} {:>12} {:15} {:24} {}",
        expense.date.format(date_format).to_string(),
        expense.amount.format_with_symbol(&expense.currency.symbol()),
        expense.category.name(),
        description,
        expense.currency
    )
}

/// Format a list of expenses as a history register
pub fn format_expense_history(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet. Start by adding your first expense!\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>12} {:15} {:24} {}\n",
        "Date", "Amount", "Category", "Description", "Currency"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, date_format));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, ExpenseCategory, Money};
    use chrono::NaiveDate;

    fn expense() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            Money::from_cents(20000),
            ExpenseCategory::Food,
        )
        .with_description("Weekly groceries")
    }

    #[test]
    fn test_format_expense_row() {
        let row = format_expense_row(&expense(), "%Y-%m-%d");
        assert!(row.starts_with("2024-05-01"));
        assert!(row.contains("$200.00"));
        assert!(row.contains("Food"));
        assert!(row.contains("Weekly groceries"));
        assert!(row.ends_with("USD"));
    }

    #[test]
    fn test_row_uses_record_currency_and_date_format() {
        let euro = expense().with_currency(Currency::parse("EUR").unwrap());
        let row = format_expense_row(&euro, "%d/%m/%Y");
        assert!(row.starts_with("01/05/2024"));
        assert!(row.contains("€200.00"));
    }

    #[test]
    fn test_format_empty_history() {
        let formatted = format_expense_history(&[], "%Y-%m-%d");
        assert!(formatted.contains("No expenses recorded yet"));
    }

    #[test]
    fn test_history_has_header() {
        let formatted = format_expense_history(&[expense()], "%Y-%m-%d");
        assert!(formatted.starts_with("Date"));
        assert_eq!(formatted.lines().count(), 3);
    }
}
