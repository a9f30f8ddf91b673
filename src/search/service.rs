//! Main search service implementation

use crate::error::Result;
use crate::models::QuizItem;
use crate::search::SearchQuery;
use crate::state::CatalogStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One page of search results plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Matching items for the requested page, in ascending id order
    pub results: Vec<QuizItem>,

    /// Matches across all pages
    pub total_results: u64,

    /// ceil(totalResults / limit); 0 when nothing matches
    pub total_pages: u64,

    /// Echo of the requested page, never clamped to the last page
    pub current_page: u64,
}

/// Title search over the catalogue
pub struct SearchService {
    store: Arc<dyn CatalogStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Execute a search: one page of matches plus totals. The find and
    /// count are two independent reads; a write landing between them may
    /// show in one and not the other.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let results = self
            .store
            .find_by_title(&query.query, query.skip(), query.limit)
            .await?;
        let total_results = self.store.count_by_title(&query.query).await?;
        let total_pages = total_results.div_ceil(query.limit.max(1));

        tracing::debug!(
            query = %query.query,
            page = query.page,
            limit = query.limit,
            total_results,
            "Search executed"
        );

        Ok(SearchPage {
            results,
            total_results,
            total_pages,
            current_page: query.page,
        })
    }
}
