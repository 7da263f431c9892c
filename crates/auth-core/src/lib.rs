//! # Auth Core
//!
//! Domain entities, ports, and the authentication service.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
