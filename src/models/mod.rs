//! Core data models for the expense tracker
//!
//! The expense record and the small value types it is built from.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{CategoryFilter, ExpenseCategory};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
