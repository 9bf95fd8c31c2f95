use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::domain::{FoundItem, FoundItemReport, ItemId, ItemUpdate, LostItem, LostItemReport};
use super::service::{ItemCatalogService, ItemServiceError};
use crate::repository::{Repository, RepositoryError};

type SharedCatalog<L, F> = Arc<ItemCatalogService<L, F>>;

/// Public report endpoints plus the admin edit/delete operations for both collections.
pub fn item_router<L, F>(service: SharedCatalog<L, F>) -> Router
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    Router::new()
        .route(
            "/api/lost-items",
            get(list_lost_handler::<L, F>).post(report_lost_handler::<L, F>),
        )
        .route(
            "/api/lost-items/:item_id",
            get(get_lost_handler::<L, F>)
                .put(update_lost_handler::<L, F>)
                .delete(delete_lost_handler::<L, F>),
        )
        .route(
            "/api/found-items",
            get(list_found_handler::<L, F>).post(report_found_handler::<L, F>),
        )
        .route(
            "/api/found-items/:item_id",
            get(get_found_handler::<L, F>)
                .put(update_found_handler::<L, F>)
                .delete(delete_found_handler::<L, F>),
        )
        .with_state(service)
}

pub(crate) async fn list_lost_handler<L, F>(State(service): State<SharedCatalog<L, F>>) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.lost_items(), StatusCode::OK)
}

pub(crate) async fn report_lost_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Json(report): Json<LostItemReport>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.report_lost(report), StatusCode::CREATED)
}

pub(crate) async fn get_lost_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Path(item_id): Path<String>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.lost_item(&ItemId(item_id)), StatusCode::OK)
}

pub(crate) async fn update_lost_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Path(item_id): Path<String>,
    Json(update): Json<ItemUpdate>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.update_lost(&ItemId(item_id), update), StatusCode::OK)
}

pub(crate) async fn delete_lost_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Path(item_id): Path<String>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    match service.delete_lost(&ItemId(item_id)) {
        Ok(_) => deleted_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_found_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.found_items(), StatusCode::OK)
}

pub(crate) async fn report_found_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Json(report): Json<FoundItemReport>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.report_found(report), StatusCode::CREATED)
}

pub(crate) async fn get_found_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Path(item_id): Path<String>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.found_item(&ItemId(item_id)), StatusCode::OK)
}

pub(crate) async fn update_found_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Path(item_id): Path<String>,
    Json(update): Json<ItemUpdate>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    respond(service.update_found(&ItemId(item_id), update), StatusCode::OK)
}

pub(crate) async fn delete_found_handler<L, F>(
    State(service): State<SharedCatalog<L, F>>,
    Path(item_id): Path<String>,
) -> Response
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    match service.delete_found(&ItemId(item_id)) {
        Ok(_) => deleted_response(),
        Err(error) => error_response(error),
    }
}

fn respond<T: serde::Serialize>(
    result: Result<T, ItemServiceError>,
    success: StatusCode,
) -> Response {
    match result {
        Ok(body) => (success, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

fn deleted_response() -> Response {
    let payload = json!({ "message": "Item deleted successfully" });
    (StatusCode::OK, Json(payload)).into_response()
}

fn error_response(error: ItemServiceError) -> Response {
    let (status, message) = match &error {
        ItemServiceError::Validation(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        ItemServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "Item not found".to_string())
        }
        ItemServiceError::Repository(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };
    (status, Json(json!({ "error": message }))).into_response()
}
