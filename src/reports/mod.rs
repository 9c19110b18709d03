//! Reports module for FinTrack
//!
//! Provides the monthly spending analysis behind the dashboard.

pub mod spending;

pub use spending::{category_distribution, daily_spending, CategorySpending, DailySpending, SpendingReport};
