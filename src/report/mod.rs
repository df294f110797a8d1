//! The downloadable PDF report of the current month's expenses.
//!
//! Building a report happens in two steps: [layout_report] decides what goes
//! where on each page and [render_pdf] draws it.

mod endpoint;
mod layout;
mod pdf;

pub use endpoint::get_report;

use layout::layout_report;
use pdf::render_pdf;

use crate::{Error, month::YearMonth, summary::MonthlySummary};

/// Build the PDF report for `summary`.
///
/// # Errors
///
/// Returns [Error::ReportRenderError] if the PDF could not be produced.
pub fn build_report(summary: &MonthlySummary) -> Result<Vec<u8>, Error> {
    render_pdf(&layout_report(summary))
}

/// The file name suggested to browsers when downloading the report for `month`.
pub fn report_file_name(month: YearMonth) -> String {
    format!("Expense_Report_{month}.pdf")
}

#[cfg(test)]
mod tests {
    use time::Month;

    use crate::month::YearMonth;

    use super::report_file_name;

    #[test]
    fn file_name_uses_year_and_month() {
        assert_eq!(
            report_file_name(YearMonth::new(2026, Month::March)),
            "Expense_Report_2026-03.pdf"
        );
    }
}
