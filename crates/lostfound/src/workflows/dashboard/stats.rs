use serde::Serialize;

use crate::workflows::claims::Claim;
use crate::workflows::feedback::{ContactMessage, ContactStatus};

/// Collection sizes that need no inspection of individual records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub lost: usize,
    pub found: usize,
    pub users: usize,
}

/// Aggregate counters shown on the dashboard landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_lost: usize,
    pub total_found: usize,
    pub total_users: usize,
    pub total_claims: usize,
    /// Claims still awaiting review, including records stored with the legacy "pending" label.
    pub pending_claims: usize,
    pub total_contacts: usize,
    pub pending_feedbacks: usize,
}

impl DashboardStats {
    pub fn compute(totals: Totals, claims: &[Claim], contacts: &[ContactMessage]) -> Self {
        Self {
            total_lost: totals.lost,
            total_found: totals.found,
            total_users: totals.users,
            total_claims: claims.len(),
            pending_claims: claims.iter().filter(|claim| claim.status.is_pending()).count(),
            total_contacts: contacts.len(),
            pending_feedbacks: contacts
                .iter()
                .filter(|contact| contact.status == ContactStatus::Pending)
                .count(),
        }
    }
}
