//! In-memory expense store
//!
//! Keeps the table in process memory. Used where no file should be touched,
//! such as service tests.

use std::sync::RwLock;

use crate::error::FinTrackError;
use crate::models::ExpenseTable;

use super::ExpenseStore;

#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    table: RwLock<ExpenseTable>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn try_load(&self) -> Result<ExpenseTable, FinTrackError> {
        let table = self.table.read().map_err(|e| {
            FinTrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(table.clone())
    }

    fn save(&self, table: &ExpenseTable) -> Result<(), FinTrackError> {
        let mut stored = self.table.write().map_err(|e| {
            FinTrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *stored = table.clone();
        Ok(())
    }
}
