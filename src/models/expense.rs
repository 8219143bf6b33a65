//! Expense record
//!
//! A single logged spending entry. The persisted field name for the category
//! is lowercase `category`; older blobs that wrote `Category` still load.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// Free-form label, may be empty
    pub name: String,

    /// Signed amount; zero and negative values are allowed
    pub amount: Money,

    /// Free-form category text
    #[serde(alias = "Category")]
    pub category: String,
}

impl Expense {
    /// Create a new expense with a fresh identifier
    pub fn new(name: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category: category.into(),
        }
    }

    /// Exact, case-sensitive category match
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.amount, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Coffee", Money::from_cents(450), "Food");
        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(450));
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_new_expenses_get_distinct_ids() {
        let a = Expense::new("A", Money::zero(), "Other");
        let b = Expense::new("A", Money::zero(), "Other");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let expense = Expense::new("Bus", Money::from_cents(200), "Travel");
        assert!(expense.is_in_category("Travel"));
        assert!(!expense.is_in_category("travel"));
    }

    #[test]
    fn test_serialized_shape() {
        let expense = Expense::new("Coffee", Money::from_cents(450), "Food");
        let value = serde_json::to_value(&expense).unwrap();

        assert_eq!(value["id"], expense.id.as_uuid().to_string());
        assert_eq!(value["name"], "Coffee");
        assert_eq!(value["amount"], 4.5);
        assert_eq!(value["category"], "Food");
        assert!(value.get("Category").is_none());
    }

    #[test]
    fn test_reads_capitalized_category_field() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Taxi",
            "amount": 12.25,
            "Category": "Travel"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, "Travel");
        assert_eq!(expense.amount, Money::from_cents(1225));
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("Coffee", Money::from_cents(450), "Food");
        assert_eq!(expense.to_string(), "Coffee ($4.50, Food)");
    }
}
