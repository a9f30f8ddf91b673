use crate::error::Result;
use crate::models::{QuizItem, QuizItemDraft};
use crate::state::{title_matches, CatalogStore};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// In-memory catalogue store (for development and testing)
#[derive(Clone)]
pub struct InMemoryStore {
    items: Arc<DashMap<u64, QuizItem>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Matching items in ascending id order
    fn matching_sorted(&self, title_query: &str) -> Vec<QuizItem> {
        let needle = title_query.to_lowercase();
        let mut items: Vec<QuizItem> = self
            .items
            .iter()
            .filter(|entry| title_matches(&entry.value().title, &needle))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn insert_item(&self, draft: QuizItemDraft) -> Result<QuizItem> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = QuizItem::from_draft(id, draft);
        self.items.insert(id, item.clone());

        tracing::debug!(item_id = id, quiz_type = item.kind(), "Quiz item saved");
        Ok(item)
    }

    async fn get_item(&self, id: u64) -> Result<Option<QuizItem>> {
        Ok(self.items.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_title(
        &self,
        title_query: &str,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<QuizItem>> {
        Ok(self
            .matching_sorted(title_query)
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_title(&self, title_query: &str) -> Result<u64> {
        let needle = title_query.to_lowercase();
        let count = self
            .items
            .iter()
            .filter(|entry| title_matches(&entry.value().title, &needle))
            .count();
        Ok(count as u64)
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizVariant;

    fn read_along_draft(title: &str) -> QuizItemDraft {
        QuizItemDraft {
            title: title.to_string(),
            variant: QuizVariant::ReadAlong,
            sibling_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryStore::new();

        let saved = store
            .insert_item(read_along_draft("First reading"))
            .await
            .unwrap();

        let retrieved = store.get_item(saved.id).await.unwrap();
        assert_eq!(retrieved, Some(saved));
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = InMemoryStore::new();

        let a = store.insert_item(read_along_draft("a")).await.unwrap();
        let b = store.insert_item(read_along_draft("b")).await.unwrap();
        let c = store.insert_item(read_along_draft("c")).await.unwrap();

        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[tokio::test]
    async fn test_find_by_title_is_case_insensitive() {
        let store = InMemoryStore::new();
        store
            .insert_item(read_along_draft("Category Quiz"))
            .await
            .unwrap();
        store
            .insert_item(read_along_draft("Unrelated"))
            .await
            .unwrap();

        let found = store.find_by_title("cat", 0, 10).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Category Quiz");
    }

    #[tokio::test]
    async fn test_find_by_title_pagination_window() {
        let store = InMemoryStore::new();
        for i in 0..5 {
            store
                .insert_item(read_along_draft(&format!("Reading {}", i)))
                .await
                .unwrap();
        }

        let window = store.find_by_title("reading", 2, 2).await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].title, "Reading 2");
        assert_eq!(window[1].title, "Reading 3");
    }

    #[tokio::test]
    async fn test_empty_query_matches_everything() {
        let store = InMemoryStore::new();
        for i in 0..3 {
            store
                .insert_item(read_along_draft(&format!("Item {}", i)))
                .await
                .unwrap();
        }

        assert_eq!(store.count_by_title("").await.unwrap(), 3);
        assert_eq!(store.find_by_title("", 0, 10).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_count_by_title() {
        let store = InMemoryStore::new();
        store
            .insert_item(read_along_draft("Math drill"))
            .await
            .unwrap();
        store
            .insert_item(read_along_draft("math drill advanced"))
            .await
            .unwrap();
        store
            .insert_item(read_along_draft("Spelling"))
            .await
            .unwrap();

        assert_eq!(store.count_by_title("MATH").await.unwrap(), 2);
        assert_eq!(store.count_by_title("nothing").await.unwrap(), 0);
    }
}
