//! Storage layer for FinTrack
//!
//! The expense table sits behind the narrow [`ExpenseStore`] interface so the
//! whole-file CSV backend can be replaced without touching the ledger.
//! Session state is stored separately as JSON.

pub mod expenses;
pub mod file_io;
pub mod memory;
pub mod session;

pub use expenses::CsvExpenseStore;
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use memory::MemoryExpenseStore;
pub use session::SessionRepository;

use crate::config::paths::FinTrackPaths;
use crate::error::FinTrackError;
use crate::models::{Expense, ExpenseTable};

/// Durable storage for the expense table
pub trait ExpenseStore {
    /// Read the full table, reporting any read or parse failure
    fn try_load(&self) -> Result<ExpenseTable, FinTrackError>;

    /// Overwrite storage with the full contents of `table`
    fn save(&self, table: &ExpenseTable) -> Result<(), FinTrackError>;

    /// Read the full table. A missing, unreadable or corrupt backing store
    /// yields an empty table; the failure is logged.
    fn load(&self) -> ExpenseTable {
        self.try_load().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load expenses, using an empty table");
            ExpenseTable::new()
        })
    }

    /// Add one expense to the end of the stored table.
    ///
    /// Fails without writing when the existing data cannot be read, so a
    /// corrupt file is never replaced by a single-row table.
    fn append(&self, expense: Expense) -> Result<(), FinTrackError> {
        let mut table = self.try_load()?;
        table.push(expense);
        self.save(&table)
    }
}

/// Main storage coordinator
pub struct Storage {
    pub expenses: CsvExpenseStore,
    pub session: SessionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinTrackPaths) -> Result<Self, FinTrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: CsvExpenseStore::new(paths.expenses_file()),
            session: SessionRepository::new(paths.session_file()),
        })
    }
}
