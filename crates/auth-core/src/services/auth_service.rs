//! Authentication service: register, login, authenticate, profile access.

use std::sync::Arc;
use std::time::Duration;

use auth_security::jwt::JwtService;
use auth_security::password::PasswordService;
use auth_shared::constants::{PROFILE_CACHE_TTL_SECS, TOKEN_TYPE_BEARER};
use auth_shared::types::mask_email;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Account, AccountProfile, NewAccount, ProfilePatch};
use crate::error::DomainError;
use crate::repositories::{AccountRepository, ProfileCache, SessionRegistry};

/// Service configuration, injected at construction. No process-wide
/// globals; the one TTL value here bounds both the signed token and the
/// registry entry.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

/// Bearer credential handed out by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Orchestrates the hasher, token codec, session registry, and durable
/// account store. The only component with business logic.
pub struct AuthService<R, S, C>
where
    R: AccountRepository,
    S: SessionRegistry,
    C: ProfileCache,
{
    accounts: Arc<R>,
    sessions: Arc<S>,
    profiles: Arc<C>,
    jwt: JwtService,
    token_ttl: Duration,
}

impl<R, S, C> AuthService<R, S, C>
where
    R: AccountRepository,
    S: SessionRegistry,
    C: ProfileCache,
{
    pub fn new(accounts: Arc<R>, sessions: Arc<S>, profiles: Arc<C>, config: AuthConfig) -> Self {
        let jwt = JwtService::new(&config.jwt_secret, config.token_ttl_secs);
        let token_ttl = Duration::from_secs(config.token_ttl_secs.max(0) as u64);
        Self {
            accounts,
            sessions,
            profiles,
            jwt,
            token_ttl,
        }
    }

    /// Register a new account. Duplicate detection is atomic in the store
    /// (unique index), not a read-then-write here.
    pub async fn register(&self, new_account: NewAccount) -> Result<AccountProfile, DomainError> {
        new_account
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let password_hash = PasswordService::hash(&new_account.password)
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?;

        let account = Account::new(
            new_account.email,
            password_hash,
            new_account.first_name,
            new_account.last_name,
        )
        .map_err(|e| DomainError::Validation(e.to_string()))?;

        let created = self.accounts.insert(&account).await?;

        info!("Registration successful for {}", mask_email(&created.email));
        Ok(AccountProfile::from(&created))
    }

    /// Verify credentials and issue a bearer token. The registry write
    /// completes before the token leaves this function; a registry failure
    /// fails the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let account = self.accounts.find_by_email(email).await?;

        // Unknown email and wrong password collapse into one outcome.
        let verified = match &account {
            Some(account) => PasswordService::verify(password, &account.password_hash),
            None => false,
        };
        let account = match (account, verified) {
            (Some(account), true) => account,
            _ => {
                warn!("Login failed for {}", mask_email(email));
                return Err(DomainError::InvalidCredentials);
            }
        };

        let token = self
            .jwt
            .issue(&account.id)
            .map_err(|e| DomainError::TokenGeneration(e.to_string()))?;

        self.sessions
            .put(&token, &account.id, self.token_ttl)
            .await?;

        info!("Login successful for {}", mask_email(&account.email));
        Ok(IssuedToken {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.jwt.access_token_expiry(),
        })
    }

    /// Resolve a bearer token to its account.
    ///
    /// The token must carry a valid signature and unexpired embedded
    /// expiry, the registry must hold a live entry for it, and the stored
    /// subject must match the claimed one. Every failure collapses to
    /// `Unauthorized`; only transient dependency failures pass through as
    /// themselves.
    pub async fn authenticate(&self, token: &str) -> Result<Account, DomainError> {
        let claims = self.jwt.validate(token).map_err(|_| DomainError::Unauthorized)?;

        // Parse the claimed subject exactly once, failing closed.
        let claimed_subject =
            Uuid::parse_str(&claims.sub).map_err(|_| DomainError::Unauthorized)?;

        let stored_subject = self
            .sessions
            .get(token)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        // A registry entry rebound to another subject should never occur;
        // reject it anyway.
        if stored_subject != claimed_subject {
            warn!(
                "Session subject mismatch: registry holds {}, token claims {}",
                stored_subject, claimed_subject
            );
            return Err(DomainError::Unauthorized);
        }

        // A deleted account is unauthenticated, not a server error.
        self.accounts
            .find_by_id(&claimed_subject)
            .await?
            .ok_or(DomainError::Unauthorized)
    }

    /// Public projection, read through the profile cache.
    pub async fn get_profile(&self, account: &Account) -> AccountProfile {
        match self.profiles.get(&account.id).await {
            Ok(Some(cached)) => return cached,
            Ok(None) => {}
            Err(e) => warn!("Profile cache read failed, treating as miss: {}", e),
        }

        let profile = AccountProfile::from(account);
        let ttl = Duration::from_secs(PROFILE_CACHE_TTL_SECS);
        if let Err(e) = self.profiles.put(&profile, ttl).await {
            warn!("Profile cache write failed: {}", e);
        }
        profile
    }

    /// Apply a partial patch and invalidate the cached projection so
    /// subsequent reads are not stale. The caller's session stays live.
    pub async fn update_profile(
        &self,
        id: &Uuid,
        patch: ProfilePatch,
    ) -> Result<AccountProfile, DomainError> {
        // An empty patch is a read: no row is touched and the update
        // timestamp does not advance.
        if patch.is_empty() {
            let account = self
                .accounts
                .find_by_id(id)
                .await?
                .ok_or(DomainError::Unauthorized)?;
            return Ok(AccountProfile::from(&account));
        }

        let updated = self.accounts.update(id, &patch).await?;
        self.profiles.invalidate(id).await?;

        info!("Profile updated for account {}", id);
        Ok(AccountProfile::from(&updated))
    }

    /// Drop the registry entry for a token. Idempotent; the token itself
    /// simply stops resolving.
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.delete(token).await
    }
}
