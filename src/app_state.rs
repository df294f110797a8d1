//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{Clock, budget::Budget, expense::ExpenseStore};

/// The state of the server.
///
/// Cloning the state is cheap and every clone shares the same expenses and
/// budget.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every expense recorded since the server started.
    pub expense_store: Arc<Mutex<ExpenseStore>>,

    /// The monthly budget.
    pub budget: Arc<Mutex<Budget>>,

    /// The source of the current date and time.
    pub clock: Arc<dyn Clock>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// The current month is decided in this timezone.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with no expenses and no budget set.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(clock: impl Clock + 'static, local_timezone: &str) -> Self {
        Self {
            expense_store: Arc::new(Mutex::new(ExpenseStore::new())),
            budget: Arc::new(Mutex::new(Budget::default())),
            clock: Arc::new(clock),
            local_timezone: local_timezone.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use crate::FixedClock;

    use super::AppState;

    #[test]
    fn clones_share_state() {
        let state = AppState::new(FixedClock(datetime!(2026-10-19 09:00 UTC)), "Etc/UTC");
        let clone = state.clone();

        clone.expense_store.lock().unwrap().add(
            "Coffee".to_owned(),
            4.5,
            "Food".to_owned(),
            date!(2026 - 10 - 19),
        );
        clone.budget.lock().unwrap().set(100.0);

        assert_eq!(state.expense_store.lock().unwrap().len(), 1);
        assert_eq!(state.budget.lock().unwrap().get(), 100.0);
    }
}
