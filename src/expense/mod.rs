//! Recording and removing expenses.

mod create_endpoint;
mod delete_endpoint;
mod domain;
mod store;

pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use domain::{CATEGORIES, Expense, ExpenseId, parse_amount, parse_date};
pub use store::ExpenseStore;
