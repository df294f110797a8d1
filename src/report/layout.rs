//! Positions the contents of the monthly report on US Letter pages.
//!
//! Coordinates are in PDF points measured from the bottom left corner of the page.

use crate::{html::format_currency, summary::MonthlySummary};

/// The width of a US Letter page.
pub const PAGE_WIDTH: f32 = 612.0;
/// The height of a US Letter page.
pub const PAGE_HEIGHT: f32 = 792.0;

const TITLE_X: f32 = 200.0;
const TITLE_Y: f32 = 750.0;
const TITLE_FONT_SIZE: f32 = 16.0;

const HEADER_X: f32 = 100.0;
const BUDGET_Y: f32 = 720.0;
const TOTAL_SPENT_Y: f32 = 700.0;
const REMAINING_BUDGET_Y: f32 = 680.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const RULE_START_X: f32 = 50.0;
const RULE_END_X: f32 = 550.0;
const TOP_RULE_Y: f32 = 660.0;
const COLUMN_HEADING_Y: f32 = 640.0;
const COLUMN_RULE_Y: f32 = 630.0;

const DATE_X: f32 = 50.0;
const DESCRIPTION_X: f32 = 150.0;
const CATEGORY_X: f32 = 350.0;
const AMOUNT_X: f32 = 450.0;

const FIRST_ROW_Y: f32 = 610.0;
const ROW_HEIGHT: f32 = 20.0;
const ROW_FONT_SIZE: f32 = 10.0;

/// Rows are never drawn below this height.
pub const BOTTOM_MARGIN: f32 = 50.0;
/// Where rows start on every page after the first.
pub const CONTINUATION_TOP_Y: f32 = 750.0;

// Width available to text in each column, leaving a gap before the next one.
const DESCRIPTION_WIDTH: f32 = CATEGORY_X - DESCRIPTION_X - 10.0;
const CATEGORY_WIDTH: f32 = AMOUNT_X - CATEGORY_X - 10.0;
/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_CHAR_WIDTH: f32 = 0.5;
const MIN_ROW_FONT_SIZE: f32 = 6.0;

const COLUMNS: [(&str, f32); 4] = [
    ("Date", DATE_X),
    ("Description", DESCRIPTION_X),
    ("Category", CATEGORY_X),
    ("Amount", AMOUNT_X),
];

/// The built-in fonts used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

/// A single thing to draw on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Text with its baseline starting at (`x`, `y`).
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        size: f32,
    },
    /// A horizontal line at height `y`.
    Rule { from_x: f32, to_x: f32, y: f32 },
}

/// The drawing operations for one page, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, font: Font, size: f32) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            font,
            size,
        });
    }

    fn rule(&mut self, y: f32) {
        self.ops.push(DrawOp::Rule {
            from_x: RULE_START_X,
            to_x: RULE_END_X,
            y,
        });
    }
}

/// A report ready to be rendered. Always has at least one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// The report title, also used as the document title.
    pub title: String,
    pub pages: Vec<Page>,
}

/// Lay out the report for `summary`.
///
/// The first page holds the title, the budget figures and the table
/// headings. Expense rows follow in store order, moving to a new page
/// whenever the next row would fall below [BOTTOM_MARGIN].
pub fn layout_report(summary: &MonthlySummary) -> ReportLayout {
    let title = format!("Expense Report - {}", summary.month.long_name());
    let budget = if summary.budget.is_set() {
        format_currency(summary.budget.get())
    } else {
        "Not Set".to_owned()
    };

    let mut page = Page::default();
    page.text(&title, TITLE_X, TITLE_Y, Font::Bold, TITLE_FONT_SIZE);
    page.text(
        format!("Budget: {budget}"),
        HEADER_X,
        BUDGET_Y,
        Font::Regular,
        HEADER_FONT_SIZE,
    );
    page.text(
        format!("Total Spent: {}", format_currency(summary.total_spent)),
        HEADER_X,
        TOTAL_SPENT_Y,
        Font::Regular,
        HEADER_FONT_SIZE,
    );
    page.text(
        format!(
            "Remaining Budget: {}",
            format_currency(summary.remaining_budget)
        ),
        HEADER_X,
        REMAINING_BUDGET_Y,
        Font::Regular,
        HEADER_FONT_SIZE,
    );
    page.rule(TOP_RULE_Y);

    for (heading, x) in COLUMNS {
        page.text(heading, x, COLUMN_HEADING_Y, Font::Bold, HEADER_FONT_SIZE);
    }
    page.rule(COLUMN_RULE_Y);

    let mut pages = Vec::new();
    let mut y = FIRST_ROW_Y;

    for expense in &summary.expenses {
        if y < BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut page));
            y = CONTINUATION_TOP_Y;
        }

        page.text(
            expense.date.to_string(),
            DATE_X,
            y,
            Font::Regular,
            ROW_FONT_SIZE,
        );
        page.text(
            &expense.description,
            DESCRIPTION_X,
            y,
            Font::Regular,
            fitted_font_size(&expense.description, DESCRIPTION_WIDTH),
        );
        page.text(
            &expense.category,
            CATEGORY_X,
            y,
            Font::Regular,
            fitted_font_size(&expense.category, CATEGORY_WIDTH),
        );
        page.text(
            format_currency(expense.amount),
            AMOUNT_X,
            y,
            Font::Regular,
            ROW_FONT_SIZE,
        );

        y -= ROW_HEIGHT;
    }

    pages.push(page);

    ReportLayout { title, pages }
}

/// The row font size, shrunk so that `text` roughly fits in `width`.
///
/// Text is never cut. Below [MIN_ROW_FONT_SIZE] it is allowed to overflow.
fn fitted_font_size(text: &str, width: f32) -> f32 {
    let chars = text.chars().count() as f32;
    if chars == 0.0 {
        return ROW_FONT_SIZE;
    }

    (width / (chars * AVERAGE_CHAR_WIDTH)).clamp(MIN_ROW_FONT_SIZE, ROW_FONT_SIZE)
}
