//! Defines the endpoint for setting the monthly budget.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::Redirect,
};
// Must use axum_extra's Form since that parses an empty string as None.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    AppState, Error,
    budget::{Budget, parse_budget},
    endpoints,
};

/// The state needed to set the budget.
#[derive(Debug, Clone)]
pub struct SetBudgetState {
    /// The monthly budget.
    pub budget: Arc<Mutex<Budget>>,
}

impl FromRef<AppState> for SetBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budget: state.budget.clone(),
        }
    }
}

/// The form data for setting the budget.
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    /// The new budget in dollars.
    #[serde(default)]
    pub budget: Option<String>,
}

/// A route handler for setting the monthly budget, redirects to the home page.
///
/// An empty or missing budget leaves the current budget unchanged.
pub async fn set_budget_endpoint(
    State(state): State<SetBudgetState>,
    Form(form): Form<BudgetForm>,
) -> Result<Redirect, Error> {
    let Some(text) = form.budget.filter(|text| !text.trim().is_empty()) else {
        tracing::warn!("Ignoring budget form with no budget");
        return Ok(Redirect::to(endpoints::ROOT));
    };

    let value = parse_budget(&text)?;

    state
        .budget
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire budget lock: {error}"))
        .map_err(|_| Error::StateLockError)?
        .set(value);

    tracing::info!("Set monthly budget to {value}");

    Ok(Redirect::to(endpoints::ROOT))
}
