use maud::{DOCTYPE, Markup, html};

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_DELETE_STYLE: &str = "link link-danger";

// Form styles
pub const FORM_STYLE: &str = "form";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";

// Card styles
pub const CARD_STYLE: &str = "card";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                link href="/static/main.css" rel="stylesheet";
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class=(PAGE_CONTAINER_STYLE)
        {
            div class="error"
            {
                h1 class="error-code" { (header) }

                p class="error-description" { (description) }

                p { (fix) }

                a href="/" class=(BUTTON_PRIMARY_STYLE) { "Back to Homepage" }
            }
        }
    );

    base(title, &content)
}

/// Formats `number` as dollars with two decimal places, e.g. "$1234.50" or "-$3.00".
///
/// No thousands separator is added.
pub fn format_currency(number: f64) -> String {
    let rounded = (number * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{sign}${:.2}", rounded.abs())
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_currency(150.0), "$150.00");
        assert_eq!(format_currency(12.3), "$12.30");
        assert_eq!(format_currency(9.999), "$10.00");
    }

    #[test]
    fn large_amounts_have_no_separator() {
        assert_eq!(format_currency(1000.0), "$1000.00");
    }

    #[test]
    fn negative_sign_goes_before_dollar_sign() {
        assert_eq!(format_currency(-20.0), "-$20.00");
    }

    #[test]
    fn zero_is_never_negative() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_currency(0.3 - (0.1 + 0.2)), "$0.00");
        assert_eq!(format_currency(-0.004), "$0.00");
    }

    #[test]
    fn rounding_to_a_cent_keeps_sign() {
        assert_eq!(format_currency(-0.005), "-$0.01");
    }
}
