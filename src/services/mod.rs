//! Service layer for the expense tracker
//!
//! The service layer sits between the presentation layer and the store,
//! handling input validation, filtered views, and computed totals.

pub mod expense;

pub use expense::{CategoryTotal, ExpenseService, ExpenseSummary};
