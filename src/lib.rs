//! Expense tracker - record, sort, filter and delete personal expenses
//!
//! The heart of the crate is [`storage::ExpenseStore`], which owns the
//! ordered list of expenses and writes it back to a local key-value store
//! after every change.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense record and value types
//! - `storage`: Key-value backends and the expense store
//! - `services`: Input validation, filtered views and totals
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```
//! use expenses::models::Money;
//! use expenses::storage::{ExpenseStore, MemoryKeyValueStore};
//!
//! let mut store = ExpenseStore::open(MemoryKeyValueStore::new());
//! store.add("Coffee", Money::from_cents(450), "Food");
//! store.add("Bus", Money::from_cents(200), "Travel");
//! store.sort_by_amount(true);
//!
//! assert_eq!(store.expenses()[0].name, "Bus");
//! assert_eq!(store.filter_by_category(Some("Food")).len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
