//! The home page: this month's expenses, the budget and the forms for changing them.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    Error, endpoints,
    endpoints::format_endpoint,
    expense::{CATEGORIES, Expense},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base, format_currency,
    },
    summary::{MonthlySummary, SummaryState},
};

/// Display the current month's expenses and how they compare to the budget.
pub async fn get_home_page(State(state): State<SummaryState>) -> Result<Response, Error> {
    let summary = state.summarize()?;
    let today = state.clock.now_utc().date();

    Ok(home_view(&summary, today).into_response())
}

fn home_view(summary: &MonthlySummary, today: Date) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="page-title" { "Expense Tracker" }

            (budget_section(summary))
            (add_expense_section(today))
            (expenses_section(summary))
        }
    };

    base("Home", &content)
}

fn budget_section(summary: &MonthlySummary) -> Markup {
    let budget = if summary.budget.is_set() {
        format_currency(summary.budget.get())
    } else {
        "Not Set".to_owned()
    };
    let remaining_class = if summary.over_budget {
        "over-budget"
    } else {
        "under-budget"
    };

    html! {
        section class=(CARD_STYLE)
        {
            h2 { "Budget for " (summary.month.long_name()) }

            div class="summary"
            {
                div
                {
                    div class="summary-label" { "Monthly Budget" }
                    div id="monthly-budget" class="summary-value" { (budget) }
                }

                div
                {
                    div class="summary-label" { "Total Spent" }
                    div id="total-spent" class="summary-value" { (format_currency(summary.total_spent)) }
                }

                div
                {
                    div class="summary-label" { "Remaining Budget" }
                    div id="remaining-budget" class={ "summary-value " (remaining_class) }
                    {
                        (format_currency(summary.remaining_budget))
                    }
                }
            }

            @if summary.over_budget {
                p id="over-budget-warning" class="over-budget" { "You are over budget this month!" }
            }

            form method="post" action=(endpoints::SET_BUDGET) class="form-inline"
            {
                div
                {
                    label for="budget" class=(FORM_LABEL_STYLE) { "New Budget" }

                    input
                        id="budget"
                        type="number"
                        name="budget"
                        step="0.01"
                        placeholder="e.g. 1000"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Set Budget" }
            }
        }
    }
}

fn add_expense_section(today: Date) -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 { "Add Expense" }

            form method="post" action=(endpoints::ADD_EXPENSE) class=(FORM_STYLE)
            {
                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                    input
                        id="description"
                        type="text"
                        name="description"
                        placeholder="Description"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        id="amount"
                        type="number"
                        name="amount"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select id="category" name="category" required class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in CATEGORIES {
                            option value=(category) { (category) }
                        }
                    }
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        id="date"
                        type="date"
                        name="date"
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
            }
        }
    }
}

fn expenses_section(summary: &MonthlySummary) -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 { "Expenses for " (summary.month.long_name()) }

            p
            {
                a id="download-report" href=(endpoints::REPORT) class=(LINK_STYLE)
                {
                    "Download Report (PDF)"
                }
            }

            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for expense in &summary.expenses {
                        (expense_row(expense))
                    }

                    @if summary.expenses.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="5" class=(TABLE_CELL_STYLE) { "No expenses recorded this month." }
                        }
                    }
                }
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (expense.date) }
            td class=(TABLE_CELL_STYLE) { (expense.description) }
            td class=(TABLE_CELL_STYLE) { (expense.category) }
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                a href=(delete_url) class=(BUTTON_DELETE_STYLE) { "Delete" }
            }
        }
    }
}
