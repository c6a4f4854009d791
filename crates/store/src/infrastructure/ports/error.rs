//! Error types for store operations.

/// Store operation errors with context for debugging.
///
/// `Unavailable` is retryable by the caller; the store never retries
/// internally, so a persistent outage is never masked.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached within the configured timeout.
    #[error("Store unavailable during {operation}")]
    Unavailable { operation: &'static str },

    /// A field-merge update targeted a record that does not exist.
    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: String },

    /// A cascading delete could not remove every child; the parent record
    /// was left intact so no dangling foreign reference can exist.
    #[error("Cascade delete failed for parent {parent_id}: {children_remaining} child record(s) still present")]
    CascadeDeleteFailed {
        parent_id: String,
        children_remaining: usize,
    },

    /// A document did not match the record schema.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other backend fault.
    #[error("Backend error in {operation}: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn unavailable(operation: &'static str) -> Self {
        Self::Unavailable { operation }
    }

    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn cascade_delete_failed(parent_id: impl Into<String>, children_remaining: usize) -> Self {
        Self::CascadeDeleteFailed {
            parent_id: parent_id.into(),
            children_remaining,
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn backend(operation: &'static str, message: impl ToString) -> Self {
        Self::Backend {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<lorekeeper_domain::DomainError> for StoreError {
    fn from(err: lorekeeper_domain::DomainError) -> Self {
        Self::Serialization(err.to_string())
    }
}
