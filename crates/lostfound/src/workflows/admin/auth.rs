use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::AdminCredentials;

pub const ADMIN_DISPLAY_NAME: &str = "Admin";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Identity returned to the dashboard after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid admin credentials")]
    InvalidCredentials,
}

/// Checks logins against credentials injected from configuration. Without configured
/// credentials every attempt fails.
#[derive(Debug, Clone, Default)]
pub struct AdminAuthenticator {
    credentials: Option<AdminCredentials>,
}

impl AdminAuthenticator {
    pub fn new(credentials: Option<AdminCredentials>) -> Self {
        Self { credentials }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn verify(&self, email: &str, password: &str) -> Result<AdminSession, AuthError> {
        match &self.credentials {
            Some(expected) if expected.email == email && expected.password == password => {
                Ok(AdminSession {
                    name: ADMIN_DISPLAY_NAME.to_string(),
                    email: email.to_string(),
                })
            }
            _ => {
                warn!(email, "admin login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<AdminSession, AuthError> {
        self.verify(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
    }
}
