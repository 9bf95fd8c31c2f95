use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use super::recent::RecentItem;
use super::service::AdminDashboard;
use super::stats::DashboardStats;
use crate::error::AppError;
use crate::repository::Repository;
use crate::workflows::claims::{Claim, ClaimQuery, ClaimView};
use crate::workflows::feedback::ContactMessage;
use crate::workflows::items::{FoundItem, LostItem};
use crate::workflows::users::{User, UserSummary};

type SharedDashboard<L, F, C, M, U> = Arc<AdminDashboard<L, F, C, M, U>>;

/// Read endpoints backing the administrator dashboard.
pub fn dashboard_router<L, F, C, M, U>(dashboard: SharedDashboard<L, F, C, M, U>) -> Router
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Router::new()
        .route("/api/admin/stats", get(stats_handler::<L, F, C, M, U>))
        .route("/api/admin/claims", get(claims_handler::<L, F, C, M, U>))
        .route("/api/admin/feedback", get(feedback_handler::<L, F, C, M, U>))
        .route("/api/admin/users", get(users_handler::<L, F, C, M, U>))
        .route(
            "/api/admin/recent-items",
            get(recent_items_handler::<L, F, C, M, U>),
        )
        .route(
            "/api/admin/recent-claims",
            get(recent_claims_handler::<L, F, C, M, U>),
        )
        .with_state(dashboard)
}

async fn stats_handler<L, F, C, M, U>(
    State(dashboard): State<SharedDashboard<L, F, C, M, U>>,
) -> Result<Json<DashboardStats>, AppError>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Ok(Json(dashboard.stats()?))
}

async fn claims_handler<L, F, C, M, U>(
    State(dashboard): State<SharedDashboard<L, F, C, M, U>>,
    Query(query): Query<ClaimQuery>,
) -> Result<Json<Vec<ClaimView>>, AppError>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Ok(Json(dashboard.claims(&query)?))
}

async fn feedback_handler<L, F, C, M, U>(
    State(dashboard): State<SharedDashboard<L, F, C, M, U>>,
) -> Result<Json<Vec<ContactMessage>>, AppError>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Ok(Json(dashboard.feedback()?))
}

async fn users_handler<L, F, C, M, U>(
    State(dashboard): State<SharedDashboard<L, F, C, M, U>>,
) -> Result<Json<Vec<UserSummary>>, AppError>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Ok(Json(dashboard.users()?))
}

async fn recent_items_handler<L, F, C, M, U>(
    State(dashboard): State<SharedDashboard<L, F, C, M, U>>,
) -> Result<Json<Vec<RecentItem>>, AppError>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Ok(Json(dashboard.recent_items()?))
}

async fn recent_claims_handler<L, F, C, M, U>(
    State(dashboard): State<SharedDashboard<L, F, C, M, U>>,
) -> Result<Json<Vec<Claim>>, AppError>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    Ok(Json(dashboard.recent_claims()?))
}
