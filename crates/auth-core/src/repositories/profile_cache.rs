//! Profile cache trait (port)

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::AccountProfile;
use crate::error::DomainError;

/// Short-lived cache of public account projections.
///
/// Read failures degrade to a miss; invalidation failures do not, since a
/// stale projection after an update breaks read-your-writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCache: Send + Sync {
    async fn get(&self, id: &Uuid) -> Result<Option<AccountProfile>, DomainError>;

    async fn put(&self, profile: &AccountProfile, ttl: Duration) -> Result<(), DomainError>;

    /// Idempotent removal of a cached projection.
    async fn invalidate(&self, id: &Uuid) -> Result<(), DomainError>;
}
