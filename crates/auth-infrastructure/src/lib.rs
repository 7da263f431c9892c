//! # Auth Infrastructure
//!
//! Database and cache adapters for the authentication core's ports.

pub mod cache;
pub mod database;

pub use cache::RedisSessionStore;
pub use database::{create_pool, PgAccountRepository};
