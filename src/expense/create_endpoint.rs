//! Defines the endpoint for recording a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::Redirect,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    AppState, Clock, Error, endpoints,
    expense::{ExpenseStore, parse_amount, parse_date},
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The store the new expense is added to.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    /// Decides the date of expenses submitted without one.
    pub clock: Arc<dyn Clock>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            clock: state.clock.clone(),
        }
    }
}

/// The form data for creating an expense.
///
/// Every field is optional so that incomplete submissions can be discarded
/// instead of rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    /// Text detailing the expense.
    #[serde(default)]
    pub description: Option<String>,
    /// The amount spent in dollars.
    #[serde(default)]
    pub amount: Option<String>,
    /// The category of the expense.
    #[serde(default)]
    pub category: Option<String>,
    /// The date of the expense as `YYYY-MM-DD`, defaults to today (UTC).
    #[serde(default)]
    pub date: Option<String>,
}

/// A route handler for creating a new expense, redirects to the home page.
///
/// Submissions missing a description, amount or category are ignored.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, Error> {
    let (Some(description), Some(amount), Some(category)) = (
        non_empty(form.description),
        non_empty(form.amount),
        non_empty(form.category),
    ) else {
        tracing::warn!("Ignoring expense form with missing fields");
        return Ok(Redirect::to(endpoints::ROOT));
    };

    let amount = parse_amount(&amount)?;
    let date = match non_empty(form.date) {
        Some(date) => parse_date(&date)?,
        None => state.clock.now_utc().date(),
    };

    let expense = state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StateLockError)?
        .add(description, amount, category, date);

    tracing::info!("Created expense {} on {}", expense.id, expense.date);

    Ok(Redirect::to(endpoints::ROOT))
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}
