//! Claim intake, the claim status state machine, and the item-claim consistency view.
//!
//! A claim references an item by id only. Nothing keeps that reference valid: items can be
//! deleted at any time, and the admin listing compensates by hiding claims whose item no
//! longer resolves (see [`view`]).

pub mod domain;
pub mod intake;
pub mod router;
pub mod service;
pub mod view;

#[cfg(test)]
mod tests;

pub use domain::{Claim, ClaimId, ClaimStatus, ClaimSubmission, StatusChange, MAX_MESSAGE_CHARS};
pub use intake::{parse_target_status, validate_submission, ClaimValidationError, ValidatedClaim};
pub use router::claim_router;
pub use service::{ClaimService, ClaimServiceError};
pub use view::{
    consistent_claims, orphaned_claims, ClaimQuery, ClaimSort, ClaimSortKey, ClaimView,
    ItemIndex, SortDirection,
};
