use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{Claim, ClaimId, ClaimStatus, ClaimSubmission};
use super::intake::{parse_target_status, validate_submission, ClaimValidationError};
use crate::repository::{Repository, RepositoryError};

/// Claim lifecycle: intake and administrator status changes.
///
/// Claims and item custody are separate state machines. Approving a claim never changes the
/// status of the item it names.
pub struct ClaimService<R> {
    repository: Arc<R>,
}

static CLAIM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_claim_id() -> ClaimId {
    let id = CLAIM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ClaimId(format!("claim-{id:06}"))
}

impl<R> ClaimService<R>
where
    R: Repository<Claim> + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Submit a new claim, returning the repository-backed record.
    pub fn submit(&self, submission: ClaimSubmission) -> Result<Claim, ClaimServiceError> {
        self.submit_at(submission, Utc::now())
    }

    pub fn submit_at(
        &self,
        submission: ClaimSubmission,
        now: DateTime<Utc>,
    ) -> Result<Claim, ClaimServiceError> {
        let validated = validate_submission(submission)?;

        let claim = Claim {
            id: next_claim_id(),
            item_id: validated.item_id,
            claimant_name: validated.claimant_name,
            contact: validated.contact,
            message: validated.message,
            date_claimed: now,
            status: ClaimStatus::Waiting,
        };

        let stored = self.repository.insert(claim)?;
        info!(claim_id = %stored.id, item_id = %stored.item_id, "claim submitted");
        Ok(stored)
    }

    /// Overwrite the status of a claim. The requested status is validated before the claim
    /// is loaded, so an invalid request never touches the store.
    pub fn update_status(
        &self,
        claim_id: &ClaimId,
        requested: Option<&str>,
    ) -> Result<Claim, ClaimServiceError> {
        let status = parse_target_status(requested)?;

        let mut claim = self
            .repository
            .fetch(claim_id)?
            .ok_or(RepositoryError::NotFound)?;

        let previous = claim.status;
        claim.status = status;
        let stored = self.repository.update(claim)?;

        info!(
            claim_id = %stored.id,
            from = previous.label(),
            to = stored.status.label(),
            "claim status updated"
        );
        Ok(stored)
    }

    /// Fetch a claim directly by id, whether or not its item still exists.
    pub fn get(&self, claim_id: &ClaimId) -> Result<Claim, ClaimServiceError> {
        let claim = self
            .repository
            .fetch(claim_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(claim)
    }

    /// Every stored claim, orphans included, in store order.
    pub fn list(&self) -> Result<Vec<Claim>, ClaimServiceError> {
        Ok(self.repository.find_all()?)
    }
}

/// Error raised by the claim service.
#[derive(Debug, thiserror::Error)]
pub enum ClaimServiceError {
    #[error(transparent)]
    Validation(#[from] ClaimValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
