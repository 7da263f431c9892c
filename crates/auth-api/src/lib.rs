//! # Auth API
//!
//! HTTP handlers, DTOs, extractors, and the response envelope.

pub mod extractors;
pub mod handlers;
pub mod response;
pub mod state;

pub use state::{AppState, SharedAuthService};
