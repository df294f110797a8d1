//! Calendar months, used to decide which expenses count towards the budget.

use std::fmt::Display;

use time::{Date, Month};

/// A calendar month in a specific year, e.g. October 2026.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Create a year-month.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month that `date` falls in.
    pub fn of(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month name followed by the year, e.g. "October 2026".
    pub fn long_name(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// Formats the month as `YYYY-MM`, the prefix shared by every date in the month.
impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}
