use std::sync::Arc;

use tracing::debug;

use super::recent::{recent_claims, recent_items, RecentItem};
use super::stats::{DashboardStats, Totals};
use crate::repository::{Repository, RepositoryError};
use crate::workflows::claims::{
    consistent_claims, orphaned_claims, Claim, ClaimQuery, ClaimView, ItemIndex,
};
use crate::workflows::feedback::{display_order, ContactMessage};
use crate::workflows::items::{FoundItem, LostItem};
use crate::workflows::users::{User, UserSummary};

/// Read-only aggregation over the five collections.
pub struct AdminDashboard<L, F, C, M, U> {
    lost: Arc<L>,
    found: Arc<F>,
    claims: Arc<C>,
    contacts: Arc<M>,
    users: Arc<U>,
}

impl<L, F, C, M, U> AdminDashboard<L, F, C, M, U>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
    C: Repository<Claim> + 'static,
    M: Repository<ContactMessage> + 'static,
    U: Repository<User> + 'static,
{
    pub fn new(
        lost: Arc<L>,
        found: Arc<F>,
        claims: Arc<C>,
        contacts: Arc<M>,
        users: Arc<U>,
    ) -> Self {
        Self {
            lost,
            found,
            claims,
            contacts,
            users,
        }
    }

    pub fn stats(&self) -> Result<DashboardStats, RepositoryError> {
        let totals = Totals {
            lost: self.lost.find_all()?.len(),
            found: self.found.find_all()?.len(),
            users: self.users.find_all()?.len(),
        };
        let claims = self.claims.find_all()?;
        let contacts = self.contacts.find_all()?;
        Ok(DashboardStats::compute(totals, &claims, &contacts))
    }

    /// Claims whose item still exists, filtered and sorted per `query`.
    pub fn claims(&self, query: &ClaimQuery) -> Result<Vec<ClaimView>, RepositoryError> {
        let index = self.item_index()?;
        let claims = self.claims.find_all()?;

        let hidden = orphaned_claims(&claims, &index).len();
        if hidden > 0 {
            debug!(hidden, "claims hidden because their item no longer exists");
        }

        Ok(consistent_claims(claims, &index, query))
    }

    pub fn feedback(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        Ok(display_order(self.contacts.find_all()?))
    }

    /// Accounts newest first, without credentials.
    pub fn users(&self) -> Result<Vec<UserSummary>, RepositoryError> {
        let mut users = self.users.find_all()?;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users.iter().map(User::summary).collect())
    }

    pub fn recent_items(&self) -> Result<Vec<RecentItem>, RepositoryError> {
        Ok(recent_items(self.lost.find_all()?, self.found.find_all()?))
    }

    pub fn recent_claims(&self) -> Result<Vec<Claim>, RepositoryError> {
        Ok(recent_claims(self.claims.find_all()?))
    }

    fn item_index(&self) -> Result<ItemIndex, RepositoryError> {
        let lost = self.lost.find_all()?;
        let found = self.found.find_all()?;
        Ok(ItemIndex::build(&lost, &found))
    }
}
