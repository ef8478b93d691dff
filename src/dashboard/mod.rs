//! src/dashboard/mod.rs
//!
//! Loading of the role dashboards. Each loader issues its fixed set of
//! record store reads concurrently, waits for all of them and aggregates the
//! results. Failed reads are logged and degrade to zero or an empty list.

mod admin;
mod student;
mod teacher;

pub use admin::{load_admin_dashboard, AdminDashboard};
pub use student::{load_student_dashboard, StudentDashboard};
pub use teacher::{load_teacher_dashboard, TeacherDashboard};

use crate::domain::Course;
use crate::store::StoreResult;

/// Keep a count, or log the failure and report it as missing.
fn count_or_warn(result: StoreResult<u64>, what: &str) -> Option<u64> {
    match result {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to count {}, showing zero",
                what
            );
            None
        }
    }
}

/// Keep a course list, or log the failure and report it as missing.
fn courses_or_warn(result: StoreResult<Vec<Course>>, what: &str) -> Option<Vec<Course>> {
    match result {
        Ok(courses) => Some(courses),
        Err(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to read {}, showing none",
                what
            );
            None
        }
    }
}
