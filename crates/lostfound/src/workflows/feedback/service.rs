use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{ContactId, ContactMessage, ContactStatus, ContactSubmission};
use crate::repository::{Repository, RepositoryError};

/// Contact-form intake and administrator resolution.
pub struct FeedbackService<R> {
    repository: Arc<R>,
}

static CONTACT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_contact_id() -> ContactId {
    let id = CONTACT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ContactId(format!("contact-{id:06}"))
}

impl<R> FeedbackService<R>
where
    R: Repository<ContactMessage> + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, FeedbackServiceError> {
        self.submit_at(submission, Utc::now())
    }

    pub fn submit_at(
        &self,
        submission: ContactSubmission,
        now: DateTime<Utc>,
    ) -> Result<ContactMessage, FeedbackServiceError> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            present(submission.name),
            present(submission.email),
            present(submission.subject),
            present(submission.message),
        ) else {
            return Err(FeedbackValidationError::MissingFields.into());
        };

        let contact = ContactMessage {
            id: next_contact_id(),
            name,
            email: email.to_lowercase(),
            subject,
            message,
            status: ContactStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(contact)?;
        info!(contact_id = %stored.id, "feedback received");
        Ok(stored)
    }

    /// All feedback, newest first.
    pub fn list(&self) -> Result<Vec<ContactMessage>, FeedbackServiceError> {
        let mut messages = self.repository.find_all()?;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    /// Marks a message resolved. Resolving twice is a no-op on the status.
    pub fn resolve(&self, id: &ContactId) -> Result<ContactMessage, FeedbackServiceError> {
        let mut contact = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        contact.status = ContactStatus::Resolved;
        contact.updated_at = Utc::now();

        let stored = self.repository.update(contact)?;
        info!(contact_id = %stored.id, "feedback resolved");
        Ok(stored)
    }

    pub fn pending_count(&self) -> Result<usize, FeedbackServiceError> {
        Ok(self
            .repository
            .find_all()?
            .iter()
            .filter(|contact| contact.status == ContactStatus::Pending)
            .count())
    }
}

/// Dashboard ordering: open messages ahead of resolved ones, newest first within each group.
pub fn display_order(mut messages: Vec<ContactMessage>) -> Vec<ContactMessage> {
    messages.sort_by(|a, b| match (a.status, b.status) {
        (ContactStatus::Pending, ContactStatus::Resolved) => CmpOrdering::Less,
        (ContactStatus::Resolved, ContactStatus::Pending) => CmpOrdering::Greater,
        _ => b.created_at.cmp(&a.created_at),
    });
    messages
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackValidationError {
    #[error("All fields are required")]
    MissingFields,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackServiceError {
    #[error(transparent)]
    Validation(#[from] FeedbackValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use chrono::TimeZone;

    type MemoryContacts = InMemoryRepository<ContactMessage>;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, day, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn form() -> ContactSubmission {
        ContactSubmission {
            name: Some("  Dana Reyes ".to_string()),
            email: Some(" Dana.Reyes@Campus.EDU ".to_string()),
            subject: Some("Lost keys".to_string()),
            message: Some("Any news on my keys?".to_string()),
        }
    }

    fn contact(id: &str, day: u32, status: ContactStatus) -> ContactMessage {
        ContactMessage {
            id: ContactId(id.to_string()),
            name: "Dana".to_string(),
            email: "dana@campus.edu".to_string(),
            subject: "Question".to_string(),
            message: "Hello".to_string(),
            status,
            created_at: at(day),
            updated_at: at(day),
        }
    }

    fn service_with(
        contacts: Vec<ContactMessage>,
    ) -> (FeedbackService<MemoryContacts>, Arc<MemoryContacts>) {
        let repository = Arc::new(MemoryContacts::with_documents(contacts));
        (FeedbackService::new(repository.clone()), repository)
    }

    #[test]
    fn submission_is_trimmed_and_email_lowercased() {
        let (service, repository) = service_with(Vec::new());

        let stored = service.submit_at(form(), at(3)).expect("valid feedback");

        assert_eq!(stored.name, "Dana Reyes");
        assert_eq!(stored.email, "dana.reyes@campus.edu");
        assert_eq!(stored.status, ContactStatus::Pending);
        assert_eq!(stored.created_at, at(3));
        assert_eq!(repository.len(), Ok(1));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let (service, repository) = service_with(Vec::new());
        let incomplete = ContactSubmission {
            subject: Some("   ".to_string()),
            ..form()
        };

        let error = service.submit(incomplete).expect_err("subject missing");
        assert_eq!(error.to_string(), "All fields are required");
        assert_eq!(repository.is_empty(), Ok(true));
    }

    #[test]
    fn resolve_marks_message_resolved() {
        let (service, repository) = service_with(vec![contact("M1", 1, ContactStatus::Pending)]);
        let id = ContactId("M1".to_string());

        let resolved = service.resolve(&id).expect("resolves");
        assert_eq!(resolved.status, ContactStatus::Resolved);

        let again = service.resolve(&id).expect("resolving twice is allowed");
        assert_eq!(again.status, ContactStatus::Resolved);
        assert_eq!(repository.len(), Ok(1));
    }

    #[test]
    fn resolving_unknown_message_is_not_found() {
        let (service, _) = service_with(Vec::new());
        assert!(matches!(
            service.resolve(&ContactId("M404".to_string())),
            Err(FeedbackServiceError::Repository(RepositoryError::NotFound))
        ));
    }

    #[test]
    fn list_is_newest_first() {
        let (service, _) = service_with(vec![
            contact("M1", 1, ContactStatus::Resolved),
            contact("M2", 5, ContactStatus::Pending),
            contact("M3", 3, ContactStatus::Pending),
        ]);

        let ids: Vec<String> = service
            .list()
            .expect("list")
            .into_iter()
            .map(|contact| contact.id.0)
            .collect();
        assert_eq!(ids, vec!["M2", "M3", "M1"]);
    }

    #[test]
    fn display_order_puts_pending_first_then_newest() {
        let ordered = display_order(vec![
            contact("M1", 9, ContactStatus::Resolved),
            contact("M2", 2, ContactStatus::Pending),
            contact("M3", 4, ContactStatus::Resolved),
            contact("M4", 6, ContactStatus::Pending),
        ]);

        let ids: Vec<&str> = ordered.iter().map(|contact| contact.id.as_str()).collect();
        assert_eq!(ids, vec!["M4", "M2", "M1", "M3"]);
    }

    #[test]
    fn pending_count_ignores_resolved() {
        let (service, _) = service_with(vec![
            contact("M1", 1, ContactStatus::Pending),
            contact("M2", 2, ContactStatus::Resolved),
            contact("M3", 3, ContactStatus::Pending),
        ]);
        assert_eq!(service.pending_count().expect("count"), 2);
    }

    #[test]
    fn stored_status_uses_lowercase_labels() {
        let value = serde_json::to_value(contact("M1", 1, ContactStatus::Resolved))
            .expect("serializes");
        assert_eq!(value["status"], "resolved");
        assert_eq!(value["_id"], "M1");
        assert!(value["createdAt"].is_string());
    }
}
