//! Account repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, ProfilePatch};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Account>, DomainError>;

    /// Case-insensitive email lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Atomic insert-if-absent. Concurrent inserts with the same email are
    /// serialized by the store's uniqueness guarantee; the loser gets
    /// `DomainError::DuplicateIdentity`.
    async fn insert(&self, account: &Account) -> Result<Account, DomainError>;

    /// Apply only the fields present in the patch and advance the update
    /// timestamp in the same statement.
    async fn update(&self, id: &Uuid, patch: &ProfilePatch) -> Result<Account, DomainError>;
}
