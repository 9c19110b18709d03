//! FinTrack - personal expense tracker
//!
//! This library provides the core functionality for the FinTrack expense
//! tracker: recording expenses against a monthly budget and a running cash
//! balance, persisting them to a CSV file, and deriving the dashboard
//! metrics.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, session state)
//! - `storage`: CSV expense store and JSON session store
//! - `services`: Expense recording and budget calculations
//! - `reports`: Monthly spending breakdowns
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::FinTrackPaths;
//! use fintrack::storage::{ExpenseStore, Storage};
//!
//! let storage = Storage::new(FinTrackPaths::new()?)?;
//! let expenses = storage.expenses.load();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinTrackError, FinTrackResult};
