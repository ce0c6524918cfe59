//! Inventory operation result types.

use stockroom_domain::{ItemName, Quantity};

/// Result of adding stock under a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// No record existed; one was created
    Created { quantity: Quantity },
    /// The amount was added onto an existing record
    Updated {
        previous: Quantity,
        quantity: Quantity,
    },
}

impl AddOutcome {
    /// Quantity stored after the add.
    pub fn quantity(&self) -> Quantity {
        match self {
            Self::Created { quantity } | Self::Updated { quantity, .. } => *quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    Incremented { quantity: Quantity },
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementOutcome {
    Decremented { quantity: Quantity },
    /// The record held one (or less) and was deleted
    Removed,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Written under the new name and the old record deleted
    Renamed {
        from: ItemName,
        to: ItemName,
        quantity: Quantity,
    },
    /// Old and new names are equal; only the quantity was overwritten
    Overwritten { quantity: Quantity },
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
}
