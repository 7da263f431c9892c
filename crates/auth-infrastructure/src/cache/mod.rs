//! Cache module (Redis adapters)

pub mod redis;

pub use redis::RedisSessionStore;
