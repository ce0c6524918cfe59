//! Validated item name newtype
//!
//! The item name doubles as the document key in the remote collection, so it
//! is stored exactly as entered: no trimming and no case folding. Two names
//! that differ only in case are two different items.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for item names, counted in characters
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name (not empty, <=200 chars when entered, stored verbatim)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name from operator input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty (whitespace alone is a valid key)
    /// - The name exceeds 200 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = Self::from_stored(name)?;
        if name.0.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Item name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(name)
    }

    /// Wrap a key read back from the remote collection.
    ///
    /// Only the empty string is rejected; whatever the store holds is shown
    /// and addressable, even if it would fail [`ItemName::new`].
    pub fn from_stored(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }
        Ok(Self(key))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as shown on an item card: first character upper-cased, the
    /// rest untouched.
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Case-insensitive substring match used by the search box.
    ///
    /// An empty query matches every name.
    pub fn matches_query(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.to_lowercase())
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
