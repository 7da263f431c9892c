//! Request extractors

use auth_core::domain::Account;
use auth_core::error::DomainError;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::response::{reject, Rejection};
use crate::state::AppState;

/// Authenticated caller: the resolved account plus the verbatim bearer
/// token it presented (logout needs the token back).
pub struct CurrentSession {
    pub account: Account,
    pub token: String,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Rejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A missing or malformed header is the same uniform rejection as a
        // failed token check.
        let token = bearer_token(parts)
            .ok_or_else(|| reject(&DomainError::Unauthorized))?
            .to_string();

        let account = state
            .auth
            .authenticate(&token)
            .await
            .map_err(|e| reject(&e))?;

        Ok(CurrentSession { account, token })
    }
}
