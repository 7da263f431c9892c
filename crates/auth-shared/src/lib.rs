//! # Auth Shared
//!
//! Shared configuration, constants, types, and telemetry for the
//! authentication service.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::*;
