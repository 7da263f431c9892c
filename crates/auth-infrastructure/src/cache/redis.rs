//! Redis adapter for the session registry and profile cache

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Pool, Runtime};
use tracing::warn;
use uuid::Uuid;

use auth_core::domain::AccountProfile;
use auth_core::error::DomainError;
use auth_core::repositories::{ProfileCache, SessionRegistry};
use auth_shared::config::RedisSettings;
use auth_shared::constants::{PROFILE_KEY_PREFIX, SESSION_KEY_PREFIX};
use auth_shared::error::AppError;

/// Redis-backed session registry and profile cache.
///
/// Redis owns expiry: every entry is written with SETEX, so a `get` after
/// the TTL simply misses and the core never re-checks the clock for these
/// values.
pub struct RedisSessionStore {
    pool: Pool,
    op_timeout: Duration,
}

impl RedisSessionStore {
    pub fn new(settings: &RedisSettings) -> Result<Self, AppError> {
        let pool = Config::from_url(&settings.url)
            .builder()
            .map_err(|e| AppError::InternalError(format!("redis pool config: {}", e)))?
            .max_size(settings.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| AppError::InternalError(format!("redis pool build: {}", e)))?;
        Ok(Self {
            pool,
            op_timeout: Duration::from_secs(settings.op_timeout_secs),
        })
    }

    async fn conn(&self) -> Result<deadpool_redis::Connection, DomainError> {
        match tokio::time::timeout(self.op_timeout, self.pool.get()).await {
            Ok(result) => {
                result.map_err(|e| DomainError::DependencyUnavailable(e.to_string()))
            }
            Err(_) => Err(DomainError::DependencyUnavailable(
                "redis connection acquire timed out".to_string(),
            )),
        }
    }

    /// Bound a command by the configured per-call timeout.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, DomainError>
    where
        F: Future<Output = deadpool_redis::redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => {
                result.map_err(|e| DomainError::DependencyUnavailable(e.to_string()))
            }
            Err(_) => Err(DomainError::DependencyUnavailable(format!(
                "redis command exceeded {:?}",
                self.op_timeout
            ))),
        }
    }
}

fn session_key(token: &str) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, token)
}

fn profile_key(id: &Uuid) -> String {
    format!("{}{}", PROFILE_KEY_PREFIX, id)
}

/// An undecodable stored subject fails closed: the entry reads as absent.
fn parse_subject(raw: Option<String>) -> Option<Uuid> {
    match raw {
        Some(value) => match Uuid::parse_str(&value) {
            Ok(subject) => Some(subject),
            Err(_) => {
                warn!("Session registry held a non-UUID subject, treating as absent");
                None
            }
        },
        None => None,
    }
}

#[async_trait]
impl SessionRegistry for RedisSessionStore {
    async fn put(&self, token: &str, subject: &Uuid, ttl: Duration) -> Result<(), DomainError> {
        let mut conn = self.conn().await?;
        let key = session_key(token);
        self.bounded(conn.set_ex::<_, _, ()>(&key, subject.to_string(), ttl.as_secs()))
            .await
    }

    async fn get(&self, token: &str) -> Result<Option<Uuid>, DomainError> {
        let mut conn = self.conn().await?;
        let key = session_key(token);
        let raw: Option<String> = self.bounded(conn.get(&key)).await?;
        Ok(parse_subject(raw))
    }

    async fn delete(&self, token: &str) -> Result<(), DomainError> {
        let mut conn = self.conn().await?;
        let key = session_key(token);
        // DEL of an absent key reports 0 deletions; both outcomes succeed.
        let _deleted: i64 = self.bounded(conn.del(&key)).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileCache for RedisSessionStore {
    async fn get(&self, id: &Uuid) -> Result<Option<AccountProfile>, DomainError> {
        let mut conn = self.conn().await?;
        let key = profile_key(id);
        let raw: Option<String> = self.bounded(conn.get(&key)).await?;

        Ok(raw.and_then(|json| match serde_json::from_str(&json) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Cached profile for {} is undecodable, treating as miss: {}", id, e);
                None
            }
        }))
    }

    async fn put(&self, profile: &AccountProfile, ttl: Duration) -> Result<(), DomainError> {
        let json = serde_json::to_string(profile)
            .map_err(|e| DomainError::Database(format!("profile encode failed: {}", e)))?;

        let mut conn = self.conn().await?;
        let key = profile_key(&profile.id);
        self.bounded(conn.set_ex::<_, _, ()>(&key, json, ttl.as_secs()))
            .await
    }

    async fn invalidate(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut conn = self.conn().await?;
        let key = profile_key(id);
        let _deleted: i64 = self.bounded(conn.del(&key)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_namespaces_are_disjoint() {
        let id = Uuid::new_v4();
        assert!(session_key("abc").starts_with("session:"));
        assert!(profile_key(&id).starts_with("account:"));
    }

    #[test]
    fn test_parse_subject_fails_closed() {
        let id = Uuid::new_v4();
        assert_eq!(parse_subject(Some(id.to_string())), Some(id));
        assert_eq!(parse_subject(Some("garbage".to_string())), None);
        assert_eq!(parse_subject(None), None);
    }
}
