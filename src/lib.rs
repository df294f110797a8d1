//! Expense Tracker is a small web app for recording day-to-day spending
//! against a monthly budget.
//!
//! This library provides a router that directly serves HTML pages, plus a
//! monthly PDF report. All state lives in memory for the lifetime of the
//! process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod budget;
mod clock;
mod endpoints;
mod error;
mod expense;
mod home_page;
mod html;
mod internal_server_error;
mod logging;
mod month;
mod not_found;
mod report;
mod routing;
mod summary;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use budget::Budget;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::Error;
pub use expense::{CATEGORIES, Expense, ExpenseId, ExpenseStore};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use month::YearMonth;
pub use report::build_report;
pub use routing::build_router;
pub use summary::MonthlySummary;
pub use timezone::get_local_offset;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
