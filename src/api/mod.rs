pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::{catalog::CatalogService, search::SearchService};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>, search: Arc<SearchService>) -> Self {
        Self { catalog, search }
    }
}
