//! CSV-backed expense store
//!
//! Manages loading and saving the expense table to expenses.csv. The file
//! is rewritten in full on every save.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::FinTrackError;
use crate::models::{Currency, Expense, ExpenseCategory, ExpenseTable, Money, EXPENSE_COLUMNS};

use super::file_io::write_atomic;
use super::ExpenseStore;

/// One row as it appears in the file, before validation
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    // Older files were written before this column existed
    #[serde(rename = "Currency", default)]
    currency: Option<String>,
}

impl CsvRecord {
    fn into_expense(self, row: usize) -> Result<Expense, FinTrackError> {
        let row_error = |msg: String| FinTrackError::Csv(format!("row {}: {}", row, msg));

        let date = parse_date(&self.date).map_err(row_error)?;
        let amount = Money::parse(&self.amount).map_err(|e| row_error(e.to_string()))?;
        if !amount.is_positive() {
            return Err(row_error(format!("amount must be positive, got {}", amount)));
        }
        let category = self
            .category
            .parse::<ExpenseCategory>()
            .map_err(|e| row_error(e.to_string()))?;
        let currency = match self.currency.as_deref().map(str::trim) {
            None | Some("") => Currency::usd(),
            Some(code) => Currency::parse(code).map_err(|e| row_error(e.to_string()))?,
        };

        Ok(Expense {
            date,
            amount,
            category,
            description: self.description.unwrap_or_default(),
            currency,
        })
    }
}

/// Coerce a stored date or timestamp to a calendar date
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];
    for format in datetime_formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(datetime.date());
        }
    }

    Err(format!("Could not parse date: '{}'", s))
}

/// Expense store persisting the table as a CSV file
#[derive(Debug, Clone)]
pub struct CsvExpenseStore {
    path: PathBuf,
}

impl CsvExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %e, "failed to create storage directory");
            }
        }
    }
}

impl ExpenseStore for CsvExpenseStore {
    fn try_load(&self) -> Result<ExpenseTable, FinTrackError> {
        self.ensure_parent_dir();

        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no expense file yet, starting empty");
            return Ok(ExpenseTable::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            FinTrackError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::new(file));

        let mut table = ExpenseTable::new();
        for (idx, result) in reader.deserialize::<CsvRecord>().enumerate() {
            // Row 1 is the header
            let record = result?;
            table.push(record.into_expense(idx + 2)?);
        }

        tracing::debug!(path = %self.path.display(), rows = table.len(), "loaded expenses");
        Ok(table)
    }

    fn save(&self, table: &ExpenseTable) -> Result<(), FinTrackError> {
        let result = write_atomic(&self.path, |file| {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);

            writer.write_record(EXPENSE_COLUMNS)?;
            for expense in table {
                writer.write_record([
                    expense.date.format("%Y-%m-%d").to_string(),
                    expense.amount.to_string(),
                    expense.category.name().to_string(),
                    expense.description.clone(),
                    expense.currency.code().to_string(),
                ])?;
            }
            writer.flush()?;
            Ok(())
        });

        match &result {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), rows = table.len(), "saved expenses")
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to save expenses")
            }
        }

        result
    }
}
