/// Errors reported while listing objects from the storage backend
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Bucket or key space does not exist
    NotFound { message: String },

    /// The backend rejected this caller's permissions
    AccessDenied { message: String },

    /// The backend was unreachable or failed server-side.
    /// Unrecognized backend failures also land here.
    Unavailable { message: String },

    /// Invariant violation inside this process
    Internal { message: String },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound { message } => {
                write!(f, "Not found: {}", message)
            }
            StorageError::AccessDenied { message } => {
                write!(f, "Access denied: {}", message)
            }
            StorageError::Unavailable { message } => {
                write!(f, "Backend unavailable: {}", message)
            }
            StorageError::Internal { message } => {
                write!(f, "Internal storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
