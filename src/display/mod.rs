//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_categories, format_expense_details, format_expense_list, format_summary};
