//! Identity of the calling user, as asserted by the fronting identity
//! provider.
//!
//! Authentication itself is an external collaborator: the auth proxy in front
//! of this service verifies credentials and stamps every forwarded request
//! with an opaque user id and a role. This module only reads those headers;
//! requests that reach the service without them are unauthenticated.

use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::{async_trait, extract::FromRequestParts};
use uuid::Uuid;

use crate::utils::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Staff,
}

#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }

    /// Catalog, dome, session and theme writes are staff-only.
    pub fn require_staff(&self) -> Result<(), AppError> {
        if self.is_staff() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "You do not have permission to perform this action".to_string(),
            ))
        }
    }
}

pub fn identity_from_headers(headers: &HeaderMap) -> Result<Identity, AppError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| AppError::AuthError("Authentication credentials were not provided".into()))?
        .to_str()
        .ok()
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or_else(|| AppError::AuthError("Invalid authentication credentials".into()))?;

    // The provider only stamps the role header for privileged users.
    let role = match headers.get(USER_ROLE_HEADER) {
        None => Role::User,
        Some(value) => match value.to_str().map(str::to_ascii_lowercase).as_deref() {
            Ok("staff") => Role::Staff,
            Ok("user") => Role::User,
            _ => {
                return Err(AppError::AuthError(
                    "Invalid authentication credentials".into(),
                ))
            }
        },
    };

    Ok(Identity { user_id, role })
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from_headers(&parts.headers)
    }
}
