use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::repository::{InMemoryRepository, Repository, RepositoryError};
use crate::workflows::claims::domain::{Claim, ClaimId, ClaimStatus, ClaimSubmission};
use crate::workflows::claims::service::ClaimService;
use crate::workflows::items::{FoundItem, FoundItemStatus, ItemId, LostItem, DEFAULT_LOST_STATUS};

pub(super) type MemoryClaims = InMemoryRepository<Claim>;

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn submission() -> ClaimSubmission {
    ClaimSubmission {
        item_id: Some("X123".to_string()),
        claimant_name: Some("A. Student".to_string()),
        contact: Some("555-0100".to_string()),
        message: Some("This is mine".to_string()),
    }
}

pub(super) fn claim(id: &str, item_id: &str, claimant: &str, status: ClaimStatus) -> Claim {
    Claim {
        id: ClaimId(id.to_string()),
        item_id: ItemId(item_id.to_string()),
        claimant_name: claimant.to_string(),
        contact: "555-0100".to_string(),
        message: format!("{claimant} lost this near the quad"),
        date_claimed: at(1, 9),
        status,
    }
}

pub(super) fn lost_item(id: &str, title: &str) -> LostItem {
    LostItem {
        id: ItemId(id.to_string()),
        title: title.to_string(),
        description: None,
        category: Some("Electronics".to_string()),
        date_lost: None,
        location: Some("Student union".to_string()),
        image_url: None,
        status: DEFAULT_LOST_STATUS.to_string(),
        contact: None,
        created_at: at(1, 8),
        updated_at: at(1, 8),
    }
}

pub(super) fn found_item(id: &str, title: &str) -> FoundItem {
    FoundItem {
        id: ItemId(id.to_string()),
        title: title.to_string(),
        description: "Handed in at the front desk".to_string(),
        category: "Accessories".to_string(),
        date_found: None,
        location: "Library".to_string(),
        image_url: Some("https://img.example/found.png".to_string()),
        contact: "security@campus.edu".to_string(),
        status: FoundItemStatus::Found,
        created_at: at(1, 7),
        updated_at: at(1, 7),
    }
}

pub(super) fn build_service() -> (ClaimService<MemoryClaims>, Arc<MemoryClaims>) {
    let repository = Arc::new(MemoryClaims::new());
    let service = ClaimService::new(repository.clone());
    (service, repository)
}

pub(super) fn service_with(claims: Vec<Claim>) -> (ClaimService<MemoryClaims>, Arc<MemoryClaims>) {
    let repository = Arc::new(MemoryClaims::with_documents(claims));
    let service = ClaimService::new(repository.clone());
    (service, repository)
}

pub(super) fn stored(repository: &MemoryClaims, id: &str) -> Claim {
    repository
        .fetch(&ClaimId(id.to_string()))
        .expect("fetch succeeds")
        .expect("claim present")
}

/// Store that refuses every operation.
pub(super) struct UnavailableRepository;

impl Repository<Claim> for UnavailableRepository {
    fn find_all(&self) -> Result<Vec<Claim>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ClaimId) -> Result<Option<Claim>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _document: Claim) -> Result<Claim, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _document: Claim) -> Result<Claim, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &ClaimId) -> Result<Option<Claim>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
