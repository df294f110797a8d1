//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{html::error_view, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount of an expense could not be parsed as a finite,
    /// non-negative number.
    ///
    /// Holds the text the client submitted.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The budget could not be parsed as a finite number.
    ///
    /// Holds the text the client submitted.
    #[error("\"{0}\" is not a valid budget")]
    InvalidBudget(String),

    /// The date of an expense was not a calendar date in the format
    /// `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Could not acquire the lock on the shared expense or budget state.
    #[error("could not acquire the state lock")]
    StateLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The PDF report could not be rendered.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not render the report: {0}")]
    ReportRenderError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidAmount(_) => bad_request(
                "Invalid amount",
                "The amount must be a number that is zero or greater.",
            ),
            Error::InvalidBudget(_) => bad_request("Invalid budget", "The budget must be a number."),
            Error::InvalidDate(_) => bad_request(
                "Invalid date",
                "The date must be a calendar date in the format YYYY-MM-DD.",
            ),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StateLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

fn bad_request(description: &str, fix: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(error_view("Bad Request", "400", description, fix).into_string()),
    )
        .into_response()
}
