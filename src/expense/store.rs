//! The in-memory collection of expenses.

use time::Date;

use crate::expense::{Expense, ExpenseId};

/// Holds every recorded expense in insertion order.
///
/// IDs come from a counter that only ever increases, so the ID of a deleted
/// expense is never handed out again.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    last_id: ExpenseId,
}

impl ExpenseStore {
    /// Create an empty store. The first expense added gets the ID 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense and return a copy of it.
    pub fn add(&mut self, description: String, amount: f64, category: String, date: Date) -> Expense {
        self.last_id += 1;

        let expense = Expense {
            id: self.last_id,
            description,
            amount,
            category,
            date,
        };
        self.expenses.push(expense.clone());

        expense
    }

    /// Remove every expense with the ID `id`.
    ///
    /// Returns the number of expenses removed, which is zero if `id` is unknown.
    pub fn delete(&mut self, id: ExpenseId) -> usize {
        let count_before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);

        count_before - self.expenses.len()
    }

    /// All expenses in the order they were added.
    pub fn list_all(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of stored expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether no expenses are stored.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
