use crate::error::{AppError, Result};
use crate::models::{QuizItem, QuizItemDraft};
use crate::state::{title_matches, CatalogStore};
use async_trait::async_trait;
use sled::Db;
use std::path::Path;
use std::sync::Arc;

/// Persistent catalogue store using the Sled embedded database
#[derive(Clone)]
pub struct SledStore {
    db: Arc<Db>,
    items_tree: sled::Tree,
}

impl SledStore {
    /// Open (or create) a store at the specified path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let db = sled::open(path)
            .map_err(|e| AppError::Storage(format!("Failed to open Sled database: {}", e)))?;

        let items_tree = db
            .open_tree("quiz_items")
            .map_err(|e| AppError::Storage(format!("Failed to open quiz_items tree: {}", e)))?;

        tracing::info!("Initialized Sled store at {:?}", path);

        Ok(Self {
            db: Arc::new(db),
            items_tree,
        })
    }

    /// Serialize a quiz item to bytes. Values are JSON: the tagged,
    /// flattened item shape needs a self-describing format.
    fn serialize_item(item: &QuizItem) -> Result<Vec<u8>> {
        serde_json::to_vec(item)
            .map_err(|e| AppError::Storage(format!("Failed to serialize quiz item: {}", e)))
    }

    /// Deserialize a quiz item from bytes
    fn deserialize_item(bytes: &[u8]) -> Result<QuizItem> {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::Storage(format!("Failed to deserialize quiz item: {}", e)))
    }

    /// Big-endian keys keep tree iteration in id (= insertion) order
    fn item_key(id: u64) -> [u8; 8] {
        id.to_be_bytes()
    }
}

#[async_trait]
impl CatalogStore for SledStore {
    async fn insert_item(&self, draft: QuizItemDraft) -> Result<QuizItem> {
        let id = self
            .db
            .generate_id()
            .map_err(|e| AppError::Storage(format!("Failed to allocate quiz item id: {}", e)))?;
        let item = QuizItem::from_draft(id, draft);
        let value = Self::serialize_item(&item)?;

        self.items_tree
            .insert(Self::item_key(id), value)
            .map_err(|e| AppError::Storage(format!("Failed to save quiz item: {}", e)))?;

        // Flush to ensure durability
        self.items_tree
            .flush()
            .map_err(|e| AppError::Storage(format!("Failed to flush quiz_items tree: {}", e)))?;

        tracing::debug!(item_id = id, quiz_type = item.kind(), "Quiz item saved to Sled");
        Ok(item)
    }

    async fn get_item(&self, id: u64) -> Result<Option<QuizItem>> {
        match self.items_tree.get(Self::item_key(id)) {
            Ok(Some(bytes)) => {
                let item = Self::deserialize_item(&bytes)?;
                Ok(Some(item))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(AppError::Storage(format!("Failed to get quiz item: {}", e))),
        }
    }

    async fn find_by_title(
        &self,
        title_query: &str,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<QuizItem>> {
        let needle = title_query.to_lowercase();
        let mut items: Vec<QuizItem> = Vec::new();

        for result in self.items_tree.iter() {
            let (_, value) = result
                .map_err(|e| AppError::Storage(format!("Failed to iterate quiz items: {}", e)))?;

            let item = Self::deserialize_item(&value)?;
            if title_matches(&item.title, &needle) {
                items.push(item);
            }
        }

        Ok(items
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_title(&self, title_query: &str) -> Result<u64> {
        let needle = title_query.to_lowercase();
        let mut count = 0u64;

        for result in self.items_tree.iter() {
            let (_, value) = result
                .map_err(|e| AppError::Storage(format!("Failed to iterate quiz items: {}", e)))?;

            let item = Self::deserialize_item(&value)?;
            if title_matches(&item.title, &needle) {
                count += 1;
            }
        }

        Ok(count)
    }

    async fn flush(&self) -> Result<()> {
        self.db
            .flush_async()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }
}
