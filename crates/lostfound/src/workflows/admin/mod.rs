//! Administrator sign-in against the single configured account.

pub mod auth;
pub mod router;

pub use auth::{AdminAuthenticator, AdminSession, AuthError, LoginRequest};
pub use router::login_router;
