//! Response bodies

use serde::{Deserialize, Serialize};

// =============================================================================
// Inventory View
// =============================================================================

/// One card in the item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCardData {
    /// Raw item name, used to address the card's controls
    pub name: String,
    /// Name with the first letter capitalized
    pub title: String,
    pub quantity: i64,
    /// "Quantity: N"
    pub quantity_label: String,
}

/// Everything the inventory page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryViewResponse {
    /// Current search box text
    pub query: String,
    /// Full snapshot from the last resync
    pub items: Vec<ItemCardData>,
    /// Cards currently shown
    pub filtered: Vec<ItemCardData>,
    pub total: usize,
    /// RFC 3339 timestamp of the last resync, absent before the first one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<String>,
}

// =============================================================================
// Errors
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // === Client Errors (4xx) ===
    /// Request was malformed or invalid
    BadRequest,
    /// Requested resource not found
    NotFound,
    /// Request data failed validation
    ValidationError,

    // === Server Errors (5xx) ===
    /// The remote document store failed or was unreachable
    RemoteStoreError,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
