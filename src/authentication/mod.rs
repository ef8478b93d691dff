//! src/authentication/mod.rs

mod middleware;
mod password;

pub use middleware::{reject_anonymous_users, Identity};
pub use password::{validate_credentials, Credentials, CredentialsError};
