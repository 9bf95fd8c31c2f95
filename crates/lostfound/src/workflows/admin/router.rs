use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::auth::{AdminAuthenticator, AuthError, LoginRequest};

pub fn login_router(authenticator: Arc<AdminAuthenticator>) -> Router {
    Router::new()
        .route("/api/admin/login", post(login_handler))
        .with_state(authenticator)
}

pub(crate) async fn login_handler(
    State(authenticator): State<Arc<AdminAuthenticator>>,
    Json(request): Json<LoginRequest>,
) -> Response {
    match authenticator.login(&request) {
        Ok(admin) => {
            let payload = json!({
                "success": true,
                "admin": admin,
                "message": "Admin login successful",
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error @ AuthError::InvalidCredentials) => {
            let payload = json!({ "success": false, "message": error.to_string() });
            (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminCredentials;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn router() -> Router {
        login_router(Arc::new(AdminAuthenticator::new(Some(AdminCredentials {
            email: "admin@campus.edu".to_string(),
            password: "s3cret".to_string(),
        }))))
    }

    fn login(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn successful_login_returns_admin_identity() {
        let response = router()
            .oneshot(login(json!({ "email": "admin@campus.edu", "password": "s3cret" })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["success"], true);
        assert_eq!(payload["admin"]["name"], "Admin");
        assert_eq!(payload["admin"]["email"], "admin@campus.edu");
        assert_eq!(payload["message"], "Admin login successful");
    }

    #[tokio::test]
    async fn bad_credentials_are_unauthorized() {
        let response = router()
            .oneshot(login(json!({ "email": "admin@campus.edu", "password": "guess" })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = read_json(response).await;
        assert_eq!(payload["success"], false);
        assert_eq!(payload["message"], "Invalid admin credentials");
    }
}
