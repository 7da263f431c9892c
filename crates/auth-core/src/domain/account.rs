//! Account entity and its projections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Account identity record.
///
/// Owned by the durable store: created on registration, mutated on profile
/// update, never deleted by this core. The password hash never leaves the
/// process; serialization skips it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Account {
    pub id: Uuid,

    #[validate(email)]
    pub email: String,

    /// PHC-format digest. Never the plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let now = Utc::now();
        let account = Self {
            id: Uuid::new_v4(),
            email: email.trim().to_string(),
            password_hash,
            first_name: first_name.map(|n| n.trim().to_string()),
            last_name: last_name.map(|n| n.trim().to_string()),
            created_at: now,
            updated_at: now,
        };

        account.validate()?;
        Ok(account)
    }

    /// Apply a partial patch. Absent fields are left untouched; the update
    /// timestamp advances on every application.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        if let Some(first_name) = &patch.first_name {
            self.first_name = Some(first_name.trim().to_string());
        }
        if let Some(last_name) = &patch.last_name {
            self.last_name = Some(last_name.trim().to_string());
        }
        self.updated_at = Utc::now();
    }
}

/// Public projection of an account. Excludes the password digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Registration input. The plaintext password lives only long enough to be
/// hashed.
#[derive(Debug, Validate)]
pub struct NewAccount {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Allow-listed mutable fields for profile updates. `None` always means
/// "leave untouched"; clearing a field is not part of this surface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}
