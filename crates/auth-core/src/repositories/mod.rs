//! Ports to external state: durable account store, session registry,
//! profile cache.

pub mod account_repository;
pub mod profile_cache;
pub mod session_registry;

pub use account_repository::AccountRepository;
pub use profile_cache::ProfileCache;
pub use session_registry::SessionRegistry;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use profile_cache::MockProfileCache;
#[cfg(test)]
pub use session_registry::MockSessionRegistry;
