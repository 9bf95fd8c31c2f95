use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{User, UserId, UserStatus, UserSummary};
use crate::repository::{Repository, RepositoryError};

/// Administrator moderation over stored accounts.
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: Repository<User> + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every account without credentials, newest first.
    pub fn list(&self) -> Result<Vec<UserSummary>, UserServiceError> {
        let mut users = self.repository.find_all()?;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users.iter().map(User::summary).collect())
    }

    /// The requested status is checked before the account is looked up.
    pub fn update_status(
        &self,
        id: &UserId,
        requested: Option<&str>,
    ) -> Result<UserSummary, UserServiceError> {
        let status = requested
            .and_then(UserStatus::parse)
            .ok_or(UserValidationError::InvalidStatus)?;

        let mut user = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        let previous = user.status;
        user.status = status;
        user.updated_at = Utc::now();

        let stored = self.repository.update(user)?;
        info!(
            user_id = %stored.id,
            from = previous.label(),
            to = stored.status.label(),
            "user status changed"
        );
        Ok(stored.summary())
    }

    pub fn delete(&self, id: &UserId) -> Result<UserSummary, UserServiceError> {
        let removed = self.repository.delete(id)?.ok_or(RepositoryError::NotFound)?;
        info!(user_id = %removed.id, "user deleted");
        Ok(removed.summary())
    }

    pub fn count(&self) -> Result<usize, UserServiceError> {
        Ok(self.repository.find_all()?.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("Invalid status value.")]
    InvalidStatus,
}

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error(transparent)]
    Validation(#[from] UserValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
