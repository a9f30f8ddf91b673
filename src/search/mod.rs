//! Paginated, case-insensitive title search over the catalogue
//!
//! Matching is a plain substring scan in the store; this module owns the
//! query contract (defaults, required `q`) and the page arithmetic.

mod query;
mod service;

pub use query::{SearchParams, SearchQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use service::{SearchPage, SearchService};
