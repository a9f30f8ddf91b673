//! Search query parsing and defaults

use crate::error::{AppError, Result};
use serde::Deserialize;

/// Page used when the client sends none (or an unusable value)
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the client sends none (or an unusable value)
pub const DEFAULT_LIMIT: u64 = 20;

/// Raw query-string shape of `GET /search`. Numbers arrive as text so
/// unusable values can fall back to defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Title substring to match; required, may be empty
    pub q: Option<String>,

    /// 1-based page number
    pub page: Option<String>,

    /// Maximum results per page
    pub limit: Option<String>,
}

impl SearchParams {
    /// Validate into an executable query. A missing `q` is the one hard
    /// error; unusable `page`/`limit` values fall back to the defaults.
    pub fn into_query(self) -> Result<SearchQuery> {
        let query = self
            .q
            .ok_or_else(|| AppError::BadRequest("query parameter 'q' is required".to_string()))?;

        Ok(SearchQuery {
            query,
            page: parse_positive(self.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(self.limit.as_deref(), DEFAULT_LIMIT),
        })
    }
}

/// Validated search input
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Case-insensitive title substring; empty matches everything
    pub query: String,

    /// 1-based page number
    pub page: u64,

    /// Maximum results per page
    pub limit: u64,
}

impl SearchQuery {
    /// Create a query with default pagination
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the page (minimum 1)
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size (minimum 1)
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Matches skipped before this page
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    match raw.and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(n) if n >= 1 => n,
        _ => default,
    }
}
