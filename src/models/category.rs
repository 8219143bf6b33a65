//! Category vocabulary
//!
//! Records carry their category as free text, so anything the blob holds is
//! preserved. What users can pick at the entry point is the fixed list below,
//! and list views can additionally choose `All` to disable filtering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// One of the fixed categories offered when entering an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Travel,
    Shopping,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Travel,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];

    /// Canonical name, as stored on records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseError;

    /// Case-insensitive lookup against the fixed vocabulary
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Unknown category '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|c| c.as_str()).join(", ")
                ))
            })
    }
}

/// The category choice of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every record
    #[default]
    All,
    /// Show only records of one category
    Only(ExpenseCategory),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// The argument to pass to the store's category filter
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_LABEL),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl From<Option<ExpenseCategory>> for CategoryFilter {
    fn from(category: Option<ExpenseCategory>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order() {
        let names: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Food", "Travel", "Shopping", "Other"]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            " SHOPPING ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Shopping
        );
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "Rent".parse::<ExpenseCategory>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Food, Travel, Shopping, Other"));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "travel".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ExpenseCategory::Travel)
        );
        assert!("Rent".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_query() {
        assert_eq!(CategoryFilter::All.as_query(), None);
        assert_eq!(
            CategoryFilter::Only(ExpenseCategory::Other).as_query(),
            Some("Other")
        );
        assert_eq!(CategoryFilter::All.to_string(), "All");
    }
}
