use std::sync::Arc;

use auth_core::services::AuthService;
use auth_infrastructure::{PgAccountRepository, RedisSessionStore};

/// The concrete service wiring: Postgres accounts, Redis sessions, and the
/// same Redis store doubling as the profile cache.
pub type SharedAuthService =
    Arc<AuthService<PgAccountRepository, RedisSessionStore, RedisSessionStore>>;

#[derive(Clone)]
pub struct AppState {
    pub auth: SharedAuthService,
}
