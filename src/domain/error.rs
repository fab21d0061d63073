//! Domain Layer - Errors
//!
//! Error taxonomy shared by the repository and manager layers. A failed
//! operation never leaves a partial mutation behind: callers observe either
//! the full effect or the collection exactly as it was.

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record with the given id exists
    NotFound(String),
    /// A required field was empty after trimming
    InvalidInput(String),
    /// Storage or serialization failure
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
