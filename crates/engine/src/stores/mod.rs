//! In-memory state storage modules.
//!
//! Stores manage presentation state that doesn't belong in the remote collection:
//! - `InventorySession` - last-synced snapshot, search query and filtered view
//! - `ItemDialog` - add/edit dialog fields
//! - `ItemCard` - per-item display data

pub mod inventory_session;
pub mod item_card;
pub mod item_dialog;

// Re-export store types
pub use inventory_session::InventorySession;
pub use item_card::ItemCard;
pub use item_dialog::{DialogCommand, DialogMode, ItemDialog};
