use super::domain::{ClaimStatus, ClaimSubmission, MAX_MESSAGE_CHARS};
use crate::workflows::items::ItemId;

/// Validation errors raised before a claim is written or changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimValidationError {
    #[error("All fields are required")]
    MissingFields { missing: Vec<&'static str> },
    #[error("message must be at most {max} characters (found {found})")]
    MessageTooLong { max: usize, found: usize },
    #[error("Invalid status")]
    InvalidStatus { value: String },
}

/// Submission fields after presence checks. The item reference is still unverified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedClaim {
    pub item_id: ItemId,
    pub claimant_name: String,
    pub contact: String,
    pub message: String,
}

/// Checks that all four claim fields are present and the message fits.
///
/// Values are trimmed; whitespace-only counts as missing. The referenced item is not
/// looked up.
pub fn validate_submission(
    submission: ClaimSubmission,
) -> Result<ValidatedClaim, ClaimValidationError> {
    let ClaimSubmission {
        item_id,
        claimant_name,
        contact,
        message,
    } = submission;

    let fields = [
        ("itemId", present(item_id)),
        ("claimantName", present(claimant_name)),
        ("contact", present(contact)),
        ("message", present(message)),
    ];

    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ClaimValidationError::MissingFields { missing });
    }

    let [item_id, claimant_name, contact, message] =
        fields.map(|(_, value)| value.unwrap_or_default());

    let found = message.chars().count();
    if found > MAX_MESSAGE_CHARS {
        return Err(ClaimValidationError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
            found,
        });
    }

    Ok(ValidatedClaim {
        item_id: ItemId(item_id),
        claimant_name,
        contact,
        message,
    })
}

/// Resolves an administrator's requested status. Any of the three labels is accepted
/// regardless of the claim's current state.
pub fn parse_target_status(raw: Option<&str>) -> Result<ClaimStatus, ClaimValidationError> {
    let raw = raw.unwrap_or_default();
    ClaimStatus::parse(raw).ok_or_else(|| ClaimValidationError::InvalidStatus {
        value: raw.to_string(),
    })
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
