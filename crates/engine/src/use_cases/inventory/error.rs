//! Inventory operation errors.

use crate::infrastructure::ports::RepoError;
use stockroom_domain::DomainError;

/// Errors that can occur during inventory operations.
///
/// Absent records are not errors; they surface as `Missing` outcomes.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
