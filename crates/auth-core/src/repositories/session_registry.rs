//! Session registry trait (port)

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// Revocable store of live sessions, keyed by the issued token string.
///
/// The registry enforces expiry on its own clock; callers never re-check
/// time for values it returns. Multiple simultaneous entries per subject
/// are expected (one per device).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Store the mapping, replacing any prior value. The expiry clock
    /// starts now.
    async fn put(&self, token: &str, subject: &Uuid, ttl: Duration) -> Result<(), DomainError>;

    /// Live value, or `None` if missing or expired.
    async fn get(&self, token: &str) -> Result<Option<Uuid>, DomainError>;

    /// Idempotent removal; deleting an absent key is a no-op.
    async fn delete(&self, token: &str) -> Result<(), DomainError>;
}
