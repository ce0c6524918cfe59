//! Delete item use case.

use std::sync::Arc;
use stockroom_domain::ItemName;

use crate::infrastructure::ports::InventoryCollection;

use super::error::InventoryError;
use super::types::DeleteOutcome;

/// Remove a record regardless of its quantity.
pub struct DeleteItem {
    collection: Arc<dyn InventoryCollection>,
}

impl DeleteItem {
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self { collection }
    }

    pub async fn execute(&self, name: &ItemName) -> Result<DeleteOutcome, InventoryError> {
        self.collection.delete(name).await?;
        tracing::info!(item = %name, "Deleted inventory item");
        Ok(DeleteOutcome::Deleted)
    }
}
