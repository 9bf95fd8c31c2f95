use crate::infra::{AppState, Stores};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use lostfound::workflows::admin::{login_router, AdminAuthenticator};
use lostfound::workflows::claims::claim_router;
use lostfound::workflows::dashboard::dashboard_router;
use lostfound::workflows::feedback::feedback_router;
use lostfound::workflows::items::item_router;
use lostfound::workflows::users::user_router;
use serde_json::json;
use std::sync::Arc;

/// Every workflow router plus the operational endpoints. `AppState` is supplied by the caller
/// as an `Extension` layer.
pub(crate) fn app_router(stores: &Stores, authenticator: AdminAuthenticator) -> Router {
    Router::new()
        .merge(item_router(Arc::new(stores.catalog())))
        .merge(claim_router(Arc::new(stores.claim_service())))
        .merge(feedback_router(Arc::new(stores.feedback_service())))
        .merge(user_router(Arc::new(stores.user_service())))
        .merge(login_router(Arc::new(authenticator)))
        .merge(dashboard_router(Arc::new(stores.dashboard())))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
