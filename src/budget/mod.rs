//! The monthly budget and the endpoint for changing it.

mod domain;
mod set_endpoint;

pub use domain::{Budget, parse_budget};
pub use set_endpoint::set_budget_endpoint;
