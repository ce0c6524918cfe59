//! Add item use case.
//!
//! Adds stock under a name, creating the record when it does not exist.

use std::sync::Arc;
use stockroom_domain::{ItemName, Quantity};

use crate::infrastructure::ports::InventoryCollection;

use super::error::InventoryError;
use super::types::AddOutcome;

/// Add item use case.
///
/// Reads the current record and writes the summed quantity back. The read
/// and the write are separate calls, so concurrent adds to the same name can
/// lose an update.
pub struct AddItem {
    collection: Arc<dyn InventoryCollection>,
}

impl AddItem {
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self { collection }
    }

    /// Execute the add item use case.
    ///
    /// # Arguments
    /// * `name` - Item to add stock to
    /// * `quantity` - Amount to add (1 for a plain add)
    pub async fn execute(
        &self,
        name: &ItemName,
        quantity: Quantity,
    ) -> Result<AddOutcome, InventoryError> {
        let outcome = match self.collection.get(name).await? {
            Some(previous) => AddOutcome::Updated {
                previous,
                quantity: previous.saturating_add(quantity),
            },
            None => AddOutcome::Created { quantity },
        };

        self.collection.set(name, outcome.quantity()).await?;

        match outcome {
            AddOutcome::Created { quantity } => {
                tracing::info!(item = %name, quantity = quantity.value(), "Created inventory item");
            }
            AddOutcome::Updated { previous, quantity } => {
                tracing::debug!(
                    item = %name,
                    previous = previous.value(),
                    quantity = quantity.value(),
                    "Added stock to existing item"
                );
            }
        }

        Ok(outcome)
    }
}
