//! Increment item use case.

use std::sync::Arc;
use stockroom_domain::ItemName;

use crate::infrastructure::ports::InventoryCollection;

use super::error::InventoryError;
use super::types::IncrementOutcome;

/// Raise an existing record's quantity by one. Absent names are left alone.
pub struct IncrementItem {
    collection: Arc<dyn InventoryCollection>,
}

impl IncrementItem {
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self { collection }
    }

    pub async fn execute(&self, name: &ItemName) -> Result<IncrementOutcome, InventoryError> {
        let Some(current) = self.collection.get(name).await? else {
            tracing::debug!(item = %name, "Increment skipped, item not found");
            return Ok(IncrementOutcome::Missing);
        };

        let quantity = current.increment();
        self.collection.set(name, quantity).await?;
        tracing::debug!(item = %name, quantity = quantity.value(), "Incremented item");

        Ok(IncrementOutcome::Incremented { quantity })
    }
}
