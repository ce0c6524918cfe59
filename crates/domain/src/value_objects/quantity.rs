//! Quantity value object for stock counts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Stock count of a single item.
///
/// Conceptually non-negative, but direct edits may store any integer, so the
/// type stays signed. Arithmetic saturates instead of overflowing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);
    /// Default amount for a plain add.
    pub const ONE: Quantity = Quantity(1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Add another quantity (bulk add onto an existing record).
    pub fn saturating_add(self, other: Quantity) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn increment(self) -> Self {
        self.saturating_add(Self::ONE)
    }

    /// What a single decrement does to a record holding this quantity.
    pub fn decrement_step(self) -> DecrementStep {
        DecrementStep::for_quantity(self)
    }

    /// Parse the optional quantity field of the item dialog.
    ///
    /// Blank text means "not given" and yields `Ok(None)`.
    pub fn parse_input(text: &str) -> Result<Option<Self>, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<i64>()
            .map(|v| Some(Self(v)))
            .map_err(|_| {
                DomainError::validation(format!("Quantity must be a whole number, got '{trimmed}'"))
            })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> i64 {
        quantity.0
    }
}

/// Result of decrementing a record by one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecrementStep {
    /// Record stays, holding the new quantity
    SetTo(Quantity),
    /// Record is deleted (it held 1, or was already at or below zero)
    Remove,
}

impl DecrementStep {
    pub fn for_quantity(current: Quantity) -> Self {
        if current.0 <= 1 {
            Self::Remove
        } else {
            Self::SetTo(Quantity(current.0 - 1))
        }
    }

    /// Check if this step deletes the record
    pub fn should_remove(&self) -> bool {
        matches!(self, Self::Remove)
    }
}
