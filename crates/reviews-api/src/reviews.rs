use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};

use reviews_db::StoreError;
use reviews_types::api::{
    DeleteReviewResponse, ReviewListResponse, SubmitReviewRequest, SubmitReviewResponse,
};

use crate::error::{
    ApiError, DELETE_FAILED, FETCH_FAILED, FIELDS_EMPTY, FIELDS_REQUIRED, SUBMIT_FAILED,
};
use crate::state::AppState;

pub async fn submit_review(
    State(state): State<AppState>,
    payload: Result<Json<SubmitReviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            warn!("Oversized review submission rejected");
            return ApiError::PayloadTooLarge;
        }
        warn!("Malformed review submission: {}", rejection.body_text());
        ApiError::MalformedRequest
    })?;

    let (name, review) = validate_submission(req)?;

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let created = tokio::task::spawn_blocking(move || db.db.create_review(&name, &review))
        .await
        .map_err(|e| ApiError::storage(SUBMIT_FAILED, e))?
        .map_err(|e| match e {
            StoreError::EmptyField(_) => ApiError::Validation(FIELDS_EMPTY),
            other => ApiError::storage(SUBMIT_FAILED, other),
        })?;

    info!(id = created.id, "Review submitted");

    Ok(Json(SubmitReviewResponse {
        success: true,
        review: created,
    }))
}

pub async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let reviews = tokio::task::spawn_blocking(move || db.db.list_reviews())
        .await
        .map_err(|e| ApiError::storage(FETCH_FAILED, e))?
        .map_err(|e| ApiError::storage(FETCH_FAILED, e))?;

    Ok(Json(ReviewListResponse { reviews }))
}

/// Admin only; mounted behind `require_admin`.
pub async fn delete_review(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::InvalidId)?;

    let db = state.clone();
    let deleted = tokio::task::spawn_blocking(move || db.db.delete_review(id))
        .await
        .map_err(|e| ApiError::storage(DELETE_FAILED, e))?
        .map_err(|e| ApiError::storage(DELETE_FAILED, e))?;

    info!(id, deleted, "Admin delete");

    Ok(Json(DeleteReviewResponse {
        success: true,
        deleted,
    }))
}

/// Missing or null fields are "required"; present but blank after trimming
/// is "cannot be empty". Returns the trimmed pair.
fn validate_submission(req: SubmitReviewRequest) -> Result<(String, String), ApiError> {
    let (Some(name), Some(review)) = (req.name, req.review) else {
        return Err(ApiError::Validation(FIELDS_REQUIRED));
    };

    let name = name.trim();
    let review = review.trim();
    if name.is_empty() || review.is_empty() {
        return Err(ApiError::Validation(FIELDS_EMPTY));
    }

    Ok((name.to_string(), review.to_string()))
}
