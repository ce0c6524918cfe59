//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Remote store call failed (transport, auth, or unexpected status) -
    /// includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store rejected a write because the record changed underneath it.
    #[error("Write conflict on {key}")]
    Conflict { key: String },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a Conflict error for the given document key.
    pub fn conflict(key: impl ToString) -> Self {
        Self::Conflict {
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_operation() {
        let err = RepoError::database("list_all", "connection refused");
        assert_eq!(
            err.to_string(),
            "Database error in list_all: connection refused"
        );
    }

    #[test]
    fn serialization_wraps_message() {
        assert_eq!(
            RepoError::serialization("quantity is not a number").to_string(),
            "Serialization error: quantity is not a number"
        );
    }

    #[test]
    fn conflict_names_key() {
        assert_eq!(
            RepoError::conflict("apple").to_string(),
            "Write conflict on apple"
        );
    }
}
