use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{Error, summary::SummaryState};

use super::{build_report, report_file_name};

/// Download the current month's expenses as a PDF attachment.
pub async fn get_report(State(state): State<SummaryState>) -> Result<Response, Error> {
    let summary = state.summarize()?;
    let report = build_report(&summary)?;

    tracing::info!(
        "Generated report for {} with {} expenses ({} bytes)",
        summary.month,
        summary.expenses.len(),
        report.len()
    );

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    report_file_name(summary.month)
                ),
            ),
        ],
        report,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        extract::{FromRef, State},
        http::{
            StatusCode,
            header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        },
    };
    use time::macros::{date, datetime};

    use crate::{AppState, FixedClock, summary::SummaryState, test_utils::get_header};

    use super::get_report;

    fn get_app_state() -> AppState {
        AppState::new(FixedClock(datetime!(2026-10-19 09:30 UTC)), "Etc/UTC")
    }

    #[tokio::test]
    async fn returns_pdf_attachment() {
        let state = get_app_state();

        let response = get_report(State(SummaryState::from_ref(&state)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, CONTENT_TYPE.as_str()), "application/pdf");
        assert_eq!(
            get_header(&response, CONTENT_DISPOSITION.as_str()),
            "attachment; filename=\"Expense_Report_2026-10.pdf\""
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn report_includes_expenses() {
        let state = get_app_state();
        {
            let mut store = state.expense_store.lock().unwrap();
            for i in 0..100 {
                store.add(
                    format!("Expense {i}"),
                    1.0,
                    "Other".to_owned(),
                    date!(2026 - 10 - 01),
                );
            }
        }

        let response = get_report(State(SummaryState::from_ref(&state)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"));
    }
}
