use sbom_types::{ComponentId, ValidationError};

/// Errors from component store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record is stored under the given id.
    #[error("component not found: {0}")]
    NotFound(ComponentId),

    /// The candidate record failed required-field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// Every representable id has been handed out.
    #[error("component id space exhausted")]
    IdSpaceExhausted,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
