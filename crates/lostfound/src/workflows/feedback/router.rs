use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use super::domain::{ContactId, ContactMessage, ContactSubmission};
use super::service::{FeedbackService, FeedbackServiceError};
use crate::repository::{Repository, RepositoryError};

/// Public contact form plus the administrator resolve action.
pub fn feedback_router<R>(service: Arc<FeedbackService<R>>) -> Router
where
    R: Repository<ContactMessage> + 'static,
{
    Router::new()
        .route(
            "/api/contact",
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .route("/api/contact/:contact_id/resolve", put(resolve_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<FeedbackService<R>>>,
    Json(submission): Json<ContactSubmission>,
) -> Response
where
    R: Repository<ContactMessage> + 'static,
{
    match service.submit(submission) {
        Ok(_) => {
            let payload = json!({ "message": "Your message has been sent successfully!" });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<FeedbackService<R>>>) -> Response
where
    R: Repository<ContactMessage> + 'static,
{
    match service.list() {
        Ok(messages) => (StatusCode::OK, Json(messages)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn resolve_handler<R>(
    State(service): State<Arc<FeedbackService<R>>>,
    Path(contact_id): Path<String>,
) -> Response
where
    R: Repository<ContactMessage> + 'static,
{
    match service.resolve(&ContactId(contact_id)) {
        Ok(contact) => {
            let payload = json!({
                "message": "Contact resolved successfully",
                "contact": contact,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: FeedbackServiceError) -> Response {
    let (status, message) = match &error {
        FeedbackServiceError::Validation(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        FeedbackServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            "Contact message not found".to_string(),
        ),
        FeedbackServiceError::Repository(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };
    (status, Json(json!({ "error": message }))).into_response()
}
