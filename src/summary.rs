//! The current-month figures shared by the home page and the PDF report.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{
    AppState, Clock, Error,
    budget::Budget,
    expense::{Expense, ExpenseStore},
    month::YearMonth,
    timezone::get_local_offset,
};

/// Spending in a single month measured against the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// The month being summarised.
    pub month: YearMonth,
    /// The expenses dated within `month`, in the order they were added.
    pub expenses: Vec<Expense>,
    /// The sum of the amounts of `expenses`.
    pub total_spent: f64,
    /// The budget at the time the summary was made.
    pub budget: Budget,
    /// How much of the budget is left, or zero if no budget is set.
    pub remaining_budget: f64,
    /// Whether more than the budget has been spent. Always false if no budget is set.
    pub over_budget: bool,
}

impl MonthlySummary {
    /// Summarise the expenses from `all_expenses` that fall within `month`.
    pub fn new(month: YearMonth, all_expenses: &[Expense], budget: Budget) -> Self {
        let expenses: Vec<Expense> = all_expenses
            .iter()
            .filter(|expense| month.contains(expense.date))
            .cloned()
            .collect();

        let total_spent: f64 = expenses.iter().map(|expense| expense.amount).sum();

        let (remaining_budget, over_budget) = if budget.is_set() {
            // Whole cents, so float noise never reads as overspending.
            let remaining = ((budget.get() - total_spent) * 100.0).round() / 100.0;
            (remaining, remaining < 0.0)
        } else {
            (0.0, false)
        };

        Self {
            month,
            expenses,
            total_spent,
            budget,
            remaining_budget,
            over_budget,
        }
    }
}

/// The state needed to summarise the current month.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// Every recorded expense.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    /// The monthly budget.
    pub budget: Arc<Mutex<Budget>>,
    /// Decides what the current month is.
    pub clock: Arc<dyn Clock>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            budget: state.budget.clone(),
            clock: state.clock.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl SummaryState {
    /// The month it currently is in the local timezone.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTimezoneError] if the local timezone is not a
    /// canonical timezone name.
    pub fn current_month(&self) -> Result<YearMonth, Error> {
        let now = self.clock.now_utc();
        let local_offset = get_local_offset(&self.local_timezone, now).ok_or_else(|| {
            tracing::error!("Invalid timezone {}", self.local_timezone);
            Error::InvalidTimezoneError(self.local_timezone.clone())
        })?;

        Ok(YearMonth::of(now.to_offset(local_offset).date()))
    }

    /// Summarise the current month.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is invalid or the shared state lock is poisoned.
    pub fn summarize(&self) -> Result<MonthlySummary, Error> {
        let month = self.current_month()?;

        let budget = *self
            .budget
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire budget lock: {error}"))
            .map_err(|_| Error::StateLockError)?;

        let expense_store = self
            .expense_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
            .map_err(|_| Error::StateLockError)?;

        Ok(MonthlySummary::new(month, expense_store.list_all(), budget))
    }
}
