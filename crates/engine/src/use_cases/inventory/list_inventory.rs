//! List inventory use case.

use std::sync::Arc;
use stockroom_domain::InventoryItem;

use crate::infrastructure::ports::InventoryCollection;

use super::error::InventoryError;

/// Fetch every record in the collection.
pub struct ListInventory {
    collection: Arc<dyn InventoryCollection>,
}

impl ListInventory {
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self { collection }
    }

    pub async fn execute(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.collection.list_all().await?;
        tracing::debug!(count = items.len(), "Fetched inventory");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockInventoryCollection, RepoError};
    use stockroom_domain::{ItemName, Quantity};

    #[tokio::test]
    async fn returns_every_record() {
        let mut collection = MockInventoryCollection::new();
        collection.expect_list_all().times(1).returning(|| {
            Ok(vec![
                InventoryItem::new(ItemName::new("apple").unwrap(), Quantity::new(3)),
                InventoryItem::new(ItemName::new("pear").unwrap(), Quantity::new(1)),
            ])
        });

        let items = ListInventory::new(Arc::new(collection))
            .execute()
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_str(), "apple");
    }

    #[tokio::test]
    async fn when_repo_error_propagates() {
        let mut collection = MockInventoryCollection::new();
        collection
            .expect_list_all()
            .returning(|| Err(RepoError::database("list_all", "unavailable")));

        let result = ListInventory::new(Arc::new(collection)).execute().await;

        assert!(matches!(result, Err(InventoryError::Repo(_))));
    }
}
