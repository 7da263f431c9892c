//! Application-wide constants

pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// 30 minutes, matching the issued token lifetime.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 1800;

/// Cached profile projections live briefly; updates invalidate eagerly.
pub const PROFILE_CACHE_TTL_SECS: u64 = 300;

pub const SESSION_KEY_PREFIX: &str = "session:";
pub const PROFILE_KEY_PREFIX: &str = "account:";
