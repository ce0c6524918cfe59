//! Rename item use case.
//!
//! Moves a record to a new name and optionally overwrites its quantity.

use std::sync::Arc;
use stockroom_domain::{ItemName, Quantity};

use crate::infrastructure::ports::InventoryCollection;

use super::error::InventoryError;
use super::types::RenameOutcome;

/// Rename item use case.
///
/// Writes the new record before deleting the old one, so a failure between
/// the two calls leaves both names present rather than neither.
pub struct RenameItem {
    collection: Arc<dyn InventoryCollection>,
}

impl RenameItem {
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self { collection }
    }

    /// Execute the rename item use case.
    ///
    /// # Arguments
    /// * `old_name` - Existing record to move
    /// * `new_name` - Name to store the record under
    /// * `quantity` - New quantity; `None` keeps the old record's quantity
    ///
    /// # Returns
    /// * `Ok(RenameOutcome::Missing)` - `old_name` does not exist, nothing written
    pub async fn execute(
        &self,
        old_name: &ItemName,
        new_name: &ItemName,
        quantity: Option<Quantity>,
    ) -> Result<RenameOutcome, InventoryError> {
        let Some(current) = self.collection.get(old_name).await? else {
            tracing::debug!(item = %old_name, "Rename skipped, item not found");
            return Ok(RenameOutcome::Missing);
        };

        let quantity = quantity.unwrap_or(current);
        self.collection.set(new_name, quantity).await?;

        if old_name == new_name {
            tracing::debug!(item = %new_name, quantity = quantity.value(), "Overwrote item quantity");
            return Ok(RenameOutcome::Overwritten { quantity });
        }

        self.collection.delete(old_name).await?;
        tracing::info!(
            from = %old_name,
            to = %new_name,
            quantity = quantity.value(),
            "Renamed inventory item"
        );

        Ok(RenameOutcome::Renamed {
            from: old_name.clone(),
            to: new_name.clone(),
            quantity,
        })
    }
}
