use crate::Error;

/// The amount the user plans to spend each month.
///
/// A value of zero or less means no budget has been set.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Budget(f64);

impl Budget {
    /// The budget in dollars.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Overwrite the budget. Negative values are stored as-is.
    pub fn set(&mut self, value: f64) {
        self.0 = value;
    }

    /// Whether a positive budget has been set.
    pub fn is_set(&self) -> bool {
        self.0 > 0.0
    }
}

/// Parse a budget submitted by the user.
///
/// # Errors
///
/// Returns [Error::InvalidBudget] if `text` is not a finite number.
pub fn parse_budget(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidBudget(text.to_owned())),
    }
}
