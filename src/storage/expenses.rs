//! Expense store
//!
//! Owns the ordered list of expenses and writes the whole list back to the
//! key-value backend after every mutation. Persistence problems are logged
//! and never surface to callers: the in-memory list stays authoritative.

use std::collections::BTreeSet;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, error, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};

use super::kv::KeyValueStore;

/// Key under which the expense list is persisted
pub const EXPENSES_KEY: &str = "expenses";

/// Change notifications published to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The list was (re)loaded from storage
    Loaded { count: usize },
    /// A record was appended
    Added(ExpenseId),
    /// Records were removed
    Deleted(Vec<ExpenseId>),
    /// The list was reordered by amount
    Sorted { ascending: bool },
}

/// Sole owner of the persisted expense list
pub struct ExpenseStore {
    backend: Box<dyn KeyValueStore>,
    expenses: Vec<Expense>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl ExpenseStore {
    /// Create a store over `backend` and load whatever it holds
    pub fn open(backend: impl KeyValueStore + 'static) -> Self {
        let mut store = Self {
            backend: Box::new(backend),
            expenses: Vec::new(),
            subscribers: Vec::new(),
        };
        store.load();
        store
    }

    /// Current list, in store order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn position_of(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Register for change notifications
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Append a new expense and persist
    ///
    /// Nothing is validated here: empty names, zero or negative amounts and
    /// categories outside the fixed vocabulary are all stored as given.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Expense {
        let expense = Expense::new(name, amount, category);
        debug!(id = %expense.id, "adding expense");

        self.expenses.push(expense.clone());
        self.persist();
        self.notify(StoreEvent::Added(expense.id));
        expense
    }

    /// Remove the records at the given positions of the full list
    ///
    /// Duplicate positions count once. If any position is out of range the
    /// list is left untouched and `PositionOutOfRange` is returned. Removed
    /// records are returned in their former order.
    pub fn delete_at(&mut self, positions: &[usize]) -> ExpenseResult<Vec<Expense>> {
        let positions: BTreeSet<usize> = positions.iter().copied().collect();

        if let Some(&position) = positions.iter().find(|&&p| p >= self.expenses.len()) {
            return Err(ExpenseError::PositionOutOfRange {
                position,
                len: self.expenses.len(),
            });
        }
        if positions.is_empty() {
            return Ok(Vec::new());
        }

        let mut removed: Vec<Expense> = positions
            .iter()
            .rev()
            .map(|&p| self.expenses.remove(p))
            .collect();
        removed.reverse();

        debug!(count = removed.len(), "deleted expenses");
        self.persist();
        self.notify(StoreEvent::Deleted(removed.iter().map(|e| e.id).collect()));
        Ok(removed)
    }

    /// Remove a single record by identifier
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let mut removed = self.delete_ids(&[id])?;
        removed
            .pop()
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// Remove records by identifier
    ///
    /// Every identifier must exist; otherwise nothing is removed.
    pub fn delete_ids(&mut self, ids: &[ExpenseId]) -> ExpenseResult<Vec<Expense>> {
        let positions = ids
            .iter()
            .map(|&id| {
                self.position_of(id)
                    .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
            })
            .collect::<ExpenseResult<Vec<_>>>()?;

        self.delete_at(&positions)
    }

    /// Reorder the whole list by amount and persist
    ///
    /// The sort is stable: records with equal amounts keep their relative
    /// order.
    pub fn sort_by_amount(&mut self, ascending: bool) {
        if ascending {
            self.expenses.sort_by(|a, b| a.amount.cmp(&b.amount));
        } else {
            self.expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
        }

        debug!(ascending, "sorted expenses by amount");
        self.persist();
        self.notify(StoreEvent::Sorted { ascending });
    }

    /// Records whose category equals `category` exactly
    ///
    /// `None` or an empty string returns the whole list. Never mutates.
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<Expense> {
        match category {
            None | Some("") => self.expenses.clone(),
            Some(category) => self
                .expenses
                .iter()
                .filter(|e| e.is_in_category(category))
                .cloned()
                .collect(),
        }
    }

    /// Replace the in-memory list with the persisted one
    ///
    /// A missing blob leaves the list as it is. So does a blob that cannot be
    /// read or decoded, after logging a warning.
    pub fn load(&mut self) {
        match self.backend.get(EXPENSES_KEY) {
            Ok(None) => debug!("no persisted expenses found"),
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Expense>>(&bytes) {
                Ok(expenses) => {
                    debug!(count = expenses.len(), "loaded expenses");
                    self.expenses = expenses;
                }
                Err(e) => warn!("Unable to decode expenses: {}", e),
            },
            Err(e) => warn!("Unable to read expenses: {}", e),
        }

        self.notify(StoreEvent::Loaded {
            count: self.expenses.len(),
        });
    }

    /// Write the whole list to storage, logging any failure
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            error!("Unable to save expenses: {}", e);
        }
    }

    /// Write the whole list to storage
    pub fn try_persist(&self) -> ExpenseResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.expenses)?;
        self.backend.set(EXPENSES_KEY, &bytes)
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
