//! src/domain/mod.rs

mod attendance;
mod course;
mod profile;

pub use attendance::AttendanceStatus;
pub use course::Course;
pub use profile::{Profile, Role};

/// Validation error for domain data read from the record store
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("`{0}` is not a valid role.")]
    InvalidRole(String),
}
