use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{Claim, ClaimId, ClaimSubmission, StatusChange};
use super::service::{ClaimService, ClaimServiceError};
use crate::repository::{Repository, RepositoryError};

/// Router builder exposing claim intake, lookup, and status changes.
pub fn claim_router<R>(service: Arc<ClaimService<R>>) -> Router
where
    R: Repository<Claim> + 'static,
{
    Router::new()
        .route("/api/claims", get(list_handler::<R>).post(submit_handler::<R>))
        .route(
            "/api/claims/:claim_id",
            get(fetch_handler::<R>).put(status_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ClaimService<R>>>,
    axum::Json(submission): axum::Json<ClaimSubmission>,
) -> Response
where
    R: Repository<Claim> + 'static,
{
    match service.submit(submission) {
        Ok(claim) => (StatusCode::CREATED, axum::Json(claim)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ClaimService<R>>>,
    Path(claim_id): Path<String>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Response
where
    R: Repository<Claim> + 'static,
{
    let id = ClaimId(claim_id);
    match service.update_status(&id, change.status.as_deref()) {
        Ok(claim) => (StatusCode::OK, axum::Json(claim)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<ClaimService<R>>>,
    Path(claim_id): Path<String>,
) -> Response
where
    R: Repository<Claim> + 'static,
{
    match service.get(&ClaimId(claim_id)) {
        Ok(claim) => (StatusCode::OK, axum::Json(claim)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ClaimService<R>>>) -> Response
where
    R: Repository<Claim> + 'static,
{
    match service.list() {
        Ok(claims) => (StatusCode::OK, axum::Json(claims)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ClaimServiceError) -> Response {
    let (status, message) = match &error {
        ClaimServiceError::Validation(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        ClaimServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "Claim not found".to_string())
        }
        ClaimServiceError::Repository(RepositoryError::Conflict) => {
            (StatusCode::CONFLICT, "claim already exists".to_string())
        }
        ClaimServiceError::Repository(RepositoryError::Unavailable(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };

    let payload = json!({ "error": message });
    (status, axum::Json(payload)).into_response()
}
