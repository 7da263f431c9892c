//! Domain errors

use thiserror::Error;

/// Failure taxonomy for the authentication core.
///
/// Every variant is terminal for the current request; nothing here is
/// retried inside the core. Adapters normalize their library errors into
/// these kinds at the boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Registration only. The one identity failure that names itself.
    #[error("Email already registered: {0}")]
    DuplicateIdentity(String),

    /// Login only. Covers both unknown email and wrong password so the
    /// two are observably identical.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Every authenticate failure collapses here: garbled or expired
    /// token, dead registry entry, subject mismatch, vanished account.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Store or registry timeout / unreachable. Retryable by the caller.
    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Token generation error: {0}")]
    TokenGeneration(String),

    #[error("Database error: {0}")]
    Database(String),
}
