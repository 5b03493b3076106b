use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{StorageError, ValidationError},
    models::{ListingResult, ObjectEntry},
};

/// DTO for a single listed object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectEntryDto {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// DTO for the list-bucket response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBucketResponseDto {
    pub keys: Vec<ObjectEntryDto>,
    pub count: usize,
    pub truncated: bool,
    pub prefix: String,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
}

/// DTO for the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ObjectEntry> for ObjectEntryDto {
    fn from(entry: ObjectEntry) -> Self {
        ObjectEntryDto {
            key: entry.key,
            size: entry.size,
            last_modified: entry.last_modified,
        }
    }
}

impl ListBucketResponseDto {
    /// Build the success body: entries in the order received from the
    /// listing engine, with the effective prefix echoed back.
    pub fn from_result(result: ListingResult, prefix: String) -> Self {
        let keys: Vec<ObjectEntryDto> = result.entries.into_iter().map(Into::into).collect();

        ListBucketResponseDto {
            count: keys.len(),
            keys,
            truncated: result.truncated,
            prefix,
        }
    }
}

impl ErrorResponseDto {
    pub fn validation(error: &ValidationError) -> Self {
        ErrorResponseDto {
            error: "ValidationError".to_string(),
            message: error.to_string(),
        }
    }

    /// Map a storage failure to its wire shape. `Internal` deliberately
    /// carries a fixed message; the real cause is logged server-side and
    /// must never be echoed to the caller.
    pub fn from_storage_error(error: &StorageError) -> Self {
        match error {
            StorageError::NotFound { message } => ErrorResponseDto {
                error: "NotFound".to_string(),
                message: message.clone(),
            },
            StorageError::AccessDenied { message } => ErrorResponseDto {
                error: "AccessDenied".to_string(),
                message: message.clone(),
            },
            StorageError::Unavailable { message } => ErrorResponseDto {
                error: "BackendUnavailable".to_string(),
                message: message.clone(),
            },
            StorageError::Internal { .. } => ErrorResponseDto {
                error: "InternalError".to_string(),
                message: "unexpected failure".to_string(),
            },
        }
    }
}

impl From<&StorageError> for StatusCode {
    fn from(error: &StorageError) -> Self {
        match error {
            StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
            StorageError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            StorageError::Unavailable { .. } => StatusCode::BAD_GATEWAY,
            StorageError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl HealthResponseDto {
    pub fn healthy() -> Self {
        HealthResponseDto {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
