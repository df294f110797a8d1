use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::Redirect,
};

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseId, ExpenseStore},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The store the expense is removed from.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for deleting an expense, redirects to the home page.
///
/// Deleting an expense that does not exist is not an error.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Redirect, Error> {
    let removed = state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StateLockError)?
        .delete(expense_id);

    if removed == 0 {
        tracing::debug!("Tried to delete expense {expense_id} which does not exist");
    } else {
        tracing::info!("Deleted expense {expense_id}");
    }

    Ok(Redirect::to(endpoints::ROOT))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::macros::date;

    use crate::{endpoints, expense::ExpenseStore, test_utils::get_header};

    use super::{DeleteExpenseState, delete_expense_endpoint};

    fn get_state_with_expenses(descriptions: &[&str]) -> DeleteExpenseState {
        let mut store = ExpenseStore::new();
        for description in descriptions {
            store.add(
                description.to_string(),
                20.0,
                "Bills".to_owned(),
                date!(2026 - 10 - 05),
            );
        }

        DeleteExpenseState {
            expense_store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn deletes_expense_and_redirects() {
        let state = get_state_with_expenses(&["Power", "Internet"]);

        let response = delete_expense_endpoint(State(state.clone()), Path(1))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), endpoints::ROOT);
        let store = state.expense_store.lock().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_all()[0].description, "Internet");
    }

    #[tokio::test]
    async fn deleting_missing_expense_redirects() {
        let state = get_state_with_expenses(&["Power"]);

        let response = delete_expense_endpoint(State(state.clone()), Path(99))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.expense_store.lock().unwrap().len(), 1);
    }
}
