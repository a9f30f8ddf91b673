pub mod store;
pub mod sled_store;
pub mod factory;

pub use store::*;
pub use sled_store::SledStore;
pub use factory::{create_store, create_in_memory_store};

use crate::error::Result;
use crate::models::{QuizItem, QuizItemDraft};
use async_trait::async_trait;

/// Trait for catalogue storage operations
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a draft, assigning the next id
    async fn insert_item(&self, draft: QuizItemDraft) -> Result<QuizItem>;

    /// Get an item by id
    async fn get_item(&self, id: u64) -> Result<Option<QuizItem>>;

    /// Items whose title contains the query (case-insensitive), in
    /// ascending id order, skipping `skip` matches and returning at
    /// most `limit`
    async fn find_by_title(
        &self,
        title_query: &str,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<QuizItem>>;

    /// Count items whose title contains the query (case-insensitive)
    async fn count_by_title(&self, title_query: &str) -> Result<u64>;

    /// Flush pending writes (no-op for volatile backends)
    async fn flush(&self) -> Result<()>;
}

/// Case-insensitive substring test shared by the backends. Callers pass
/// the needle already lowercased so a scan lowercases it once.
pub(crate) fn title_matches(title: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || title.to_lowercase().contains(needle_lower)
}
