//! Inventory use cases.
//!
//! Each use case is one remote read-modify-write against the inventory
//! collection. None of them refresh any local view; callers resync afterwards.

use std::sync::Arc;

mod add_item;
mod decrement_item;
mod delete_item;
mod error;
mod increment_item;
mod list_inventory;
mod rename_item;
mod types;

pub use add_item::AddItem;
pub use decrement_item::DecrementItem;
pub use delete_item::DeleteItem;
pub use error::InventoryError;
pub use increment_item::IncrementItem;
pub use list_inventory::ListInventory;
pub use rename_item::RenameItem;
pub use types::{AddOutcome, DecrementOutcome, DeleteOutcome, IncrementOutcome, RenameOutcome};

use crate::infrastructure::ports::InventoryCollection;

/// Container for inventory use cases.
pub struct InventoryUseCases {
    pub list: Arc<ListInventory>,
    pub add: Arc<AddItem>,
    pub increment: Arc<IncrementItem>,
    pub decrement: Arc<DecrementItem>,
    pub rename: Arc<RenameItem>,
    pub delete: Arc<DeleteItem>,
}

impl InventoryUseCases {
    pub fn new(
        list: Arc<ListInventory>,
        add: Arc<AddItem>,
        increment: Arc<IncrementItem>,
        decrement: Arc<DecrementItem>,
        rename: Arc<RenameItem>,
        delete: Arc<DeleteItem>,
    ) -> Self {
        Self {
            list,
            add,
            increment,
            decrement,
            rename,
            delete,
        }
    }

    /// Wire every use case to the same collection.
    pub fn for_collection(collection: Arc<dyn InventoryCollection>) -> Self {
        Self::new(
            Arc::new(ListInventory::new(collection.clone())),
            Arc::new(AddItem::new(collection.clone())),
            Arc::new(IncrementItem::new(collection.clone())),
            Arc::new(DecrementItem::new(collection.clone())),
            Arc::new(RenameItem::new(collection.clone())),
            Arc::new(DeleteItem::new(collection)),
        )
    }
}
