//! Repository port traits for database access.

use async_trait::async_trait;
use stockroom_domain::{InventoryItem, ItemName, Quantity};

use super::error::RepoError;

// =============================================================================
// Inventory Collection
// =============================================================================

/// A remote keyed collection of `{quantity}` documents.
///
/// Each document key is an item name. The four operations are exactly the ones
/// the inventory page needs from its document database; there are no
/// transactions and no atomic increments, so a read followed by a write is two
/// independent calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryCollection: Send + Sync {
    /// Enumerate every document with its data.
    async fn list_all(&self) -> Result<Vec<InventoryItem>, RepoError>;

    /// Read one document's quantity, `None` if the key is absent.
    async fn get(&self, name: &ItemName) -> Result<Option<Quantity>, RepoError>;

    /// Full overwrite of one document, creating it if absent.
    async fn set(&self, name: &ItemName, quantity: Quantity) -> Result<(), RepoError>;

    /// Remove one document. Deleting an absent key is not an error.
    async fn delete(&self, name: &ItemName) -> Result<(), RepoError>;
}
