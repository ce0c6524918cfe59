//! Inventory item entity - one `{name, quantity}` record
//!
//! The remote collection stores each item as a document keyed by `name` with a
//! single `quantity` field. `InventoryItem` is the materialized form of one
//! such document.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ItemName, Quantity};

/// A named stock item and its count.
///
/// Simple data struct: any combination of a valid name and any quantity is a
/// state the remote store can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl InventoryItem {
    pub fn new(name: ItemName, quantity: Quantity) -> Self {
        Self { name, quantity }
    }

    /// Card title for this item.
    pub fn display_name(&self) -> String {
        self.name.display_name()
    }

    /// Card subtitle for this item.
    pub fn quantity_label(&self) -> String {
        format!("Quantity: {}", self.quantity)
    }
}
