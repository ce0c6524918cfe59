//! Request bodies and query parameters

use serde::{Deserialize, Serialize};

/// `POST /api/inventory/items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    /// Amount to add; defaults to 1 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// `PUT /api/inventory/items/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub new_name: String,
    /// New quantity; the old record's quantity is carried over when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// `POST /api/inventory/dialog`
///
/// The raw text of the add/edit dialog. `editing` holds the name of the item
/// the dialog was opened for, or is absent when adding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSubmitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// `GET /api/inventory/search?q=`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
