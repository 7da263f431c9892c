//! Domain entities for the authentication service.

pub mod account;

pub use account::{Account, AccountProfile, NewAccount, ProfilePatch};
