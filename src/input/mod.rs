//! Form-field parsing and request loading

mod form;
pub mod loader;

pub use form::{parse_amount, parse_months};
pub use loader::{load_requests, load_requests_from_reader};
