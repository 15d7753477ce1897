use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
};
use serde_json::{Value, json};

use crate::middleware::require_admin;
use crate::reviews;
use crate::state::AppState;

/// Review submissions are a name and a paragraph or two.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// All routes of the service, with the request body limit applied.
/// Tracing and CORS layers are added by the server binary.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/api/admin/reviews/{id}", delete(reviews::delete_review))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/api/submit-review", post(reviews::submit_review))
        .route("/api/get-reviews", get(reviews::list_reviews))
        .route(
            "/api/reviews",
            get(reviews::list_reviews).post(reviews::submit_review),
        )
        .route("/health", get(health))
        .merge(admin_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
