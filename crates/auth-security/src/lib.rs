//! # Auth Security
//!
//! Security primitives: password hashing and signed token handling.

pub mod jwt;
pub mod password;

pub use jwt::JwtService;
pub use password::PasswordService;
