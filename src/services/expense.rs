//! Expense service
//!
//! Presentation-facing operations on top of the expense store: validating
//! raw user input, working with filtered views, and totals.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryFilter, Expense, ExpenseCategory, ExpenseId, Money};
use crate::storage::ExpenseStore;

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    pub total: Money,
}

/// Totals over a (possibly filtered) view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub filter: CategoryFilter,
    pub count: usize,
    pub total: Money,
    /// Fixed vocabulary first, then any other categories in first-seen order
    pub by_category: Vec<CategoryTotal>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Add an expense from raw form input
    ///
    /// The amount must parse as money and the category must belong to the
    /// fixed vocabulary; otherwise a validation error is returned and nothing
    /// is recorded.
    pub fn add_from_input(
        &mut self,
        name: &str,
        amount_text: &str,
        category_text: &str,
    ) -> ExpenseResult<Expense> {
        let amount =
            Money::parse(amount_text).map_err(|e| ExpenseError::Validation(e.to_string()))?;
        let category: ExpenseCategory = category_text.parse()?;

        Ok(self.add(name, amount, category))
    }

    /// Add an already-validated expense
    pub fn add(&mut self, name: &str, amount: Money, category: ExpenseCategory) -> Expense {
        self.store.add(name, amount, category.as_str())
    }

    /// The records shown for a filter choice, in store order
    pub fn visible(&self, filter: CategoryFilter) -> Vec<Expense> {
        self.store.filter_by_category(filter.as_query())
    }

    /// Delete records by their position in the filtered view
    ///
    /// Positions are resolved against what `visible(filter)` returns, then
    /// deleted by identifier, so an active filter never removes the wrong
    /// record.
    pub fn delete_visible(
        &mut self,
        filter: CategoryFilter,
        positions: &[usize],
    ) -> ExpenseResult<Vec<Expense>> {
        let view = self.visible(filter);
        let ids = positions
            .iter()
            .map(|&position| {
                view.get(position)
                    .map(|e| e.id)
                    .ok_or(ExpenseError::PositionOutOfRange {
                        position,
                        len: view.len(),
                    })
            })
            .collect::<ExpenseResult<Vec<_>>>()?;

        self.store.delete_ids(&ids)
    }

    /// Find the single record a full or short identifier refers to
    pub fn resolve_id(&self, text: &str) -> ExpenseResult<ExpenseId> {
        if let Ok(id) = text.trim().parse::<ExpenseId>() {
            return self
                .store
                .get(id)
                .map(|e| e.id)
                .ok_or_else(|| ExpenseError::expense_not_found(text));
        }

        let mut matches = self
            .store
            .expenses()
            .iter()
            .filter(|e| e.id.matches_short(text));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.id),
            (None, _) => Err(ExpenseError::expense_not_found(text)),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Identifier '{}' matches more than one expense",
                text
            ))),
        }
    }

    /// Delete records named by full or short identifiers
    pub fn delete_by_id_text<S: AsRef<str>>(&mut self, texts: &[S]) -> ExpenseResult<Vec<Expense>> {
        let ids = texts
            .iter()
            .map(|t| self.resolve_id(t.as_ref()))
            .collect::<ExpenseResult<Vec<_>>>()?;

        self.store.delete_ids(&ids)
    }

    /// Reorder the stored list by amount
    pub fn sort(&mut self, ascending: bool) {
        self.store.sort_by_amount(ascending);
    }

    /// Count and totals for a filter choice
    pub fn summary(&self, filter: CategoryFilter) -> ExpenseSummary {
        let view = self.visible(filter);

        let mut by_category: Vec<CategoryTotal> = ExpenseCategory::ALL
            .iter()
            .map(|c| CategoryTotal {
                category: c.as_str().to_string(),
                count: 0,
                total: Money::zero(),
            })
            .collect();

        for expense in &view {
            let index = match by_category
                .iter()
                .position(|t| t.category == expense.category)
            {
                Some(index) => index,
                None => {
                    by_category.push(CategoryTotal {
                        category: expense.category.clone(),
                        count: 0,
                        total: Money::zero(),
                    });
                    by_category.len() - 1
                }
            };
            by_category[index].count += 1;
            by_category[index].total += expense.amount;
        }

        if let CategoryFilter::Only(category) = filter {
            by_category.retain(|t| t.category == category.as_str());
        }

        ExpenseSummary {
            filter,
            count: view.len(),
            total: view.iter().map(|e| e.amount).sum(),
            by_category,
        }
    }
}
