//! Stockroom Shared - Wire types for the inventory HTTP API
//!
//! This crate contains the JSON request and response bodies exchanged between
//! the engine and whatever renders the inventory page.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types** - raw `String` / `i64` on the wire; the engine
//!    validates into domain value objects

pub mod requests;
pub mod responses;

pub use requests::{AddItemRequest, DialogSubmitRequest, SearchParams, UpdateItemRequest};
pub use responses::{ErrorCode, ErrorResponse, InventoryViewResponse, ItemCardData};
