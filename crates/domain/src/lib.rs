//! Stockroom Domain
//!
//! Core inventory types with no I/O:
//!
//! - `value_objects/` - `ItemName`, `Quantity`, and the decrement rule
//! - `entities/` - `InventoryItem`, the `{name, quantity}` record
//! - `search` - case-insensitive filtering over a fetched snapshot

pub mod entities;
pub mod error;
pub mod search;
pub mod value_objects;

pub use entities::InventoryItem;
pub use error::DomainError;
pub use search::filter_items;
pub use value_objects::{DecrementStep, ItemName, Quantity};
