use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{User, UserId};
use super::service::{UserService, UserServiceError};
use crate::repository::{Repository, RepositoryError};

#[derive(Debug, Default, Deserialize)]
struct StatusChange {
    #[serde(default)]
    status: Option<String>,
}

/// Administrator account moderation.
pub fn user_router<R>(service: Arc<UserService<R>>) -> Router
where
    R: Repository<User> + 'static,
{
    Router::new()
        .route("/api/users", get(list_handler::<R>))
        .route("/api/users/status/:user_id", put(status_handler::<R>))
        .route("/api/users/:user_id", delete(delete_handler::<R>))
        .with_state(service)
}

async fn list_handler<R>(State(service): State<Arc<UserService<R>>>) -> Response
where
    R: Repository<User> + 'static,
{
    match service.list() {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn status_handler<R>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<String>,
    Json(change): Json<StatusChange>,
) -> Response
where
    R: Repository<User> + 'static,
{
    match service.update_status(&UserId(user_id), change.status.as_deref()) {
        Ok(user) => {
            let payload = json!({
                "message": "User status updated successfully",
                "user": user,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

async fn delete_handler<R>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: Repository<User> + 'static,
{
    match service.delete(&UserId(user_id)) {
        Ok(_) => {
            let payload = json!({ "message": "User deleted successfully" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: UserServiceError) -> Response {
    let (status, message) = match &error {
        UserServiceError::Validation(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        UserServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "User not found.".to_string())
        }
        UserServiceError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use crate::workflows::users::domain::{UserRole, UserStatus};
    use axum::body::Body;
    use axum::http::{header, Request};
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    type MemoryUsers = InMemoryRepository<User>;

    fn account(id: &str) -> User {
        let joined = Utc
            .with_ymd_and_hms(2025, 10, 2, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        User {
            id: UserId(id.to_string()),
            name: "Jamie Fox".to_string(),
            email: "jamie@campus.edu".to_string(),
            password: "$2a$10$storedhash".to_string(),
            student_id: "S-0042".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            created_at: joined,
            updated_at: joined,
        }
    }

    fn router() -> (Router, Arc<MemoryUsers>) {
        let repository = Arc::new(MemoryUsers::with_documents([account("U1")]));
        let service = Arc::new(UserService::new(repository.clone()));
        (user_router(service), repository)
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn status_request(id: &str, status: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/users/status/{id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "status": status }).to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn listing_never_exposes_passwords() {
        let (router, _) = router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/users")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload[0]["id"], "U1");
        assert_eq!(payload[0]["status"], "active");
        assert!(payload[0].get("password").is_none());
    }

    #[tokio::test]
    async fn suspending_an_account() {
        let (router, repository) = router();

        let response = router
            .oneshot(status_request("U1", "suspended"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["message"], "User status updated successfully");
        assert_eq!(payload["user"]["status"], "suspended");
        assert!(payload["user"].get("password").is_none());

        let stored = repository
            .fetch(&UserId("U1".to_string()))
            .expect("fetch")
            .expect("present");
        assert_eq!(stored.status, UserStatus::Suspended);
    }

    #[tokio::test]
    async fn invalid_status_is_bad_request() {
        let (router, _) = router();

        let response = router
            .oneshot(status_request("U1", "banned"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "Invalid status value.");
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let (router, _) = router();

        let response = router
            .clone()
            .oneshot(status_request("U404", "active"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await["error"], "User not found.");

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/users/U404")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deleting_an_account() {
        let (router, repository) = router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/users/U1")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["message"], "User deleted successfully");
        assert_eq!(repository.is_empty(), Ok(true));
    }
}
