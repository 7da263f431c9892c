//! Domain services (business logic)

pub mod auth_service;

pub use auth_service::{AuthConfig, AuthService, IssuedToken};
