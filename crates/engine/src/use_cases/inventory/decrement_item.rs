//! Decrement item use case.
//!
//! Lowers a record by one, deleting it instead of storing zero.

use std::sync::Arc;
use stockroom_domain::{DecrementStep, ItemName};

use crate::infrastructure::ports::InventoryCollection;

use super::error::InventoryError;
use super::types::DecrementOutcome;

/// Decrement item use case.
///
/// A record holding one, zero, or a negative quantity is deleted.
pub struct DecrementItem {
    collection: Arc<dyn InventoryCollection>,
}

impl DecrementItem {
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self { collection }
    }

    pub async fn execute(&self, name: &ItemName) -> Result<DecrementOutcome, InventoryError> {
        let Some(current) = self.collection.get(name).await? else {
            tracing::debug!(item = %name, "Decrement skipped, item not found");
            return Ok(DecrementOutcome::Missing);
        };

        match current.decrement_step() {
            DecrementStep::Remove => {
                self.collection.delete(name).await?;
                tracing::info!(item = %name, previous = current.value(), "Removed inventory item");
                Ok(DecrementOutcome::Removed)
            }
            DecrementStep::SetTo(quantity) => {
                self.collection.set(name, quantity).await?;
                tracing::debug!(item = %name, quantity = quantity.value(), "Decremented item");
                Ok(DecrementOutcome::Decremented { quantity })
            }
        }
    }
}
