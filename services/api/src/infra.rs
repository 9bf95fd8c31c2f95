use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use lostfound::repository::InMemoryRepository;
use lostfound::workflows::claims::{Claim, ClaimService};
use lostfound::workflows::dashboard::AdminDashboard;
use lostfound::workflows::feedback::{ContactMessage, FeedbackService};
use lostfound::workflows::items::{FoundItem, ItemCatalogService, LostItem};
use lostfound::workflows::users::{User, UserService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type LostStore = InMemoryRepository<LostItem>;
pub(crate) type FoundStore = InMemoryRepository<FoundItem>;
pub(crate) type ClaimStore = InMemoryRepository<Claim>;
pub(crate) type ContactStore = InMemoryRepository<ContactMessage>;
pub(crate) type UserStore = InMemoryRepository<User>;

/// The five process-local collections backing one running instance.
#[derive(Clone, Default)]
pub(crate) struct Stores {
    pub(crate) lost: Arc<LostStore>,
    pub(crate) found: Arc<FoundStore>,
    pub(crate) claims: Arc<ClaimStore>,
    pub(crate) contacts: Arc<ContactStore>,
    pub(crate) users: Arc<UserStore>,
}

impl Stores {
    pub(crate) fn catalog(&self) -> ItemCatalogService<LostStore, FoundStore> {
        ItemCatalogService::new(self.lost.clone(), self.found.clone())
    }

    pub(crate) fn claim_service(&self) -> ClaimService<ClaimStore> {
        ClaimService::new(self.claims.clone())
    }

    pub(crate) fn feedback_service(&self) -> FeedbackService<ContactStore> {
        FeedbackService::new(self.contacts.clone())
    }

    pub(crate) fn user_service(&self) -> UserService<UserStore> {
        UserService::new(self.users.clone())
    }

    pub(crate) fn dashboard(
        &self,
    ) -> AdminDashboard<LostStore, FoundStore, ClaimStore, ContactStore, UserStore> {
        AdminDashboard::new(
            self.lost.clone(),
            self.found.clone(),
            self.claims.clone(),
            self.contacts.clone(),
            self.users.clone(),
        )
    }
}
