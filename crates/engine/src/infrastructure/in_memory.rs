//! In-process inventory collection.
//!
//! Stands in for the remote document store in local runs and tests. Reads and
//! writes are separate map operations, so the read-modify-write sequences in
//! the use cases race here exactly as they do against the hosted store.

use async_trait::async_trait;
use dashmap::DashMap;
use stockroom_domain::{InventoryItem, ItemName, Quantity};

use crate::infrastructure::ports::{InventoryCollection, RepoError};

#[derive(Default)]
pub struct InMemoryCollection {
    documents: DashMap<ItemName, Quantity>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection pre-populated with the given records.
    pub fn with_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let documents = DashMap::new();
        for item in items {
            documents.insert(item.name, item.quantity);
        }
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl InventoryCollection for InMemoryCollection {
    async fn list_all(&self) -> Result<Vec<InventoryItem>, RepoError> {
        let mut items: Vec<InventoryItem> = self
            .documents
            .iter()
            .map(|entry| InventoryItem::new(entry.key().clone(), *entry.value()))
            .collect();
        // Document stores enumerate by key
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn get(&self, name: &ItemName) -> Result<Option<Quantity>, RepoError> {
        Ok(self.documents.get(name).map(|entry| *entry.value()))
    }

    async fn set(&self, name: &ItemName, quantity: Quantity) -> Result<(), RepoError> {
        self.documents.insert(name.clone(), quantity);
        Ok(())
    }

    async fn delete(&self, name: &ItemName) -> Result<(), RepoError> {
        self.documents.remove(name);
        Ok(())
    }
}
