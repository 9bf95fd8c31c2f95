//! Contact-form feedback: public submissions, administrator resolution, and the ordering the
//! dashboard uses to surface open messages.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{ContactId, ContactMessage, ContactStatus, ContactSubmission};
pub use router::feedback_router;
pub use service::{display_order, FeedbackService, FeedbackServiceError, FeedbackValidationError};
