//! Student accounts as seen by administrators: listing without credentials, suspension and
//! reinstatement, and removal. Accounts are created elsewhere; this module only moderates them.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{User, UserId, UserRole, UserStatus, UserSummary};
pub use router::user_router;
pub use service::{UserService, UserServiceError, UserValidationError};
