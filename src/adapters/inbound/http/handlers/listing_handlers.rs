use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::{error, info};

use crate::{
    adapters::inbound::http::{
        dto::{ErrorResponseDto, HealthResponseDto, ListBucketResponseDto},
        router::AppState,
    },
    domain::{errors::StorageError, models::ListingQuery},
};

/// Handle bucket listing.
///
/// This is the single catch boundary: every failure raised by parsing or by
/// the listing engine is converted to a JSON error body here, and nothing
/// propagates to the platform as an unhandled fault.
pub async fn list_bucket(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListBucketResponseDto>, (StatusCode, Json<ErrorResponseDto>)> {
    // Validate before any storage call is made
    let query = ListingQuery::from_params(&params).map_err(|e| {
        info!(%e, "rejected listing request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::validation(&e)),
        )
    })?;

    info!(
        prefix = %query.prefix,
        max_keys = query.max_keys,
        "listing bucket contents"
    );

    let prefix = query.prefix.clone();
    let result = app_state
        .listing_service
        .list_bucket(query)
        .await
        .map_err(|e| {
            if let StorageError::Internal { message } = &e {
                error!(%message, "unexpected failure while listing bucket");
            }
            (
                StatusCode::from(&e),
                Json(ErrorResponseDto::from_storage_error(&e)),
            )
        })?;

    info!(
        count = result.entries.len(),
        truncated = result.truncated,
        "listing complete"
    );

    Ok(Json(ListBucketResponseDto::from_result(result, prefix)))
}

/// Handle health probes
pub async fn health_check() -> Json<HealthResponseDto> {
    Json(HealthResponseDto::healthy())
}
