//! Per-user session state
//!
//! Holds the user's monthly budget, selected currency and running cash
//! balance. This is kept apart from the expense table and persisted by
//! [`crate::storage::SessionRepository`].

use serde::{Deserialize, Serialize};

use super::{Currency, Money};

/// Default monthly budget and starting balance (1000.00)
pub const DEFAULT_AMOUNT: Money = Money::from_cents(100_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Budget for one calendar month
    #[serde(default = "default_amount")]
    pub monthly_budget: Money,

    /// Currency applied to newly recorded expenses
    #[serde(default)]
    pub currency: Currency,

    /// Cash on hand; reduced by every recorded expense and may go negative
    #[serde(default = "default_amount")]
    pub balance: Money,

    /// Set once the user confirms the initial balance
    #[serde(default)]
    pub balance_initialized: bool,
}

fn default_amount() -> Money {
    DEFAULT_AMOUNT
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_AMOUNT,
            currency: Currency::default(),
            balance: DEFAULT_AMOUNT,
            balance_initialized: false,
        }
    }
}

impl SessionState {
    /// Deduct a recorded expense from the balance. No floor is applied.
    pub fn apply_expense(&mut self, amount: Money) {
        self.balance -= amount;
    }

    /// Currency symbol for display
    pub fn symbol(&self) -> String {
        self.currency.symbol()
    }
}
