//! PostgreSQL repository implementations

pub mod account_repo_impl;

pub use account_repo_impl::PgAccountRepository;
