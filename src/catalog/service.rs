use crate::error::{AppError, Result};
use crate::models::{QuizItem, QuizItemDraft};
use crate::state::CatalogStore;
use std::sync::Arc;
use validator::Validate;

/// Catalogue write and lookup operations
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the catalogue store
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Validate a draft and persist it under a fresh id
    pub async fn create(&self, draft: QuizItemDraft) -> Result<QuizItem> {
        draft.validate()?;

        let item = self.store.insert_item(draft).await?;

        tracing::info!(
            item_id = item.id,
            quiz_type = item.kind(),
            title = %item.title,
            "Quiz item created"
        );

        Ok(item)
    }

    /// Fetch an item by id
    pub async fn get(&self, id: u64) -> Result<QuizItem> {
        self.store
            .get_item(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz item {} not found", id)))
    }

    /// Resolve an item's sibling reference. Returns `None` when the item
    /// has no sibling or the reference dangles.
    pub async fn sibling_of(&self, id: u64) -> Result<Option<QuizItem>> {
        let item = self.get(id).await?;

        match item.sibling_id {
            Some(sibling_id) => self.store.get_item(sibling_id).await,
            None => Ok(None),
        }
    }
}
