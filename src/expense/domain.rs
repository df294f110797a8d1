//! Core expense domain types.

use time::{Date, macros::format_description};

use crate::Error;

/// Identifier for an expense, unique for the lifetime of the process.
pub type ExpenseId = u64;

/// The categories offered when recording an expense.
///
/// These are suggestions for the add form, any non-empty category is accepted.
pub const CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Other",
];

/// A single recorded spending event.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// Text detailing what the money was spent on.
    pub description: String,
    /// The amount spent in dollars, never negative.
    pub amount: f64,
    /// The category the expense belongs to, e.g. "Food".
    pub category: String,
    /// The date the money was spent.
    pub date: Date,
}

/// Parse the amount of an expense.
///
/// # Errors
///
/// Returns [Error::InvalidAmount] if `text` is not a finite number or is negative.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// Parse a date in the format `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `text` is not a valid calendar date in that format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}
