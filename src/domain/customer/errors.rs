use super::value_objects::CustomerId;

// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer with id {0} not found")]
    NotFound(CustomerId),

    #[error("Customer with email {0} already exists")]
    DuplicateEmail(String),

    #[error("No data changes found")]
    NoChanges,

    #[error("Name cannot be empty")]
    InvalidName,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Failure reported by the data-access layer
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl CustomerError {
    /// Stable machine-readable kind, used in API error bodies and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            CustomerError::NotFound(_) => "NOT_FOUND",
            CustomerError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            CustomerError::NoChanges => "NO_CHANGES",
            CustomerError::InvalidName => "INVALID_NAME",
            CustomerError::InvalidEmail(_) => "INVALID_EMAIL",
            CustomerError::Storage(_) => "STORAGE_ERROR",
        }
    }
}
