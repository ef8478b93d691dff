//! src/store/mod.rs
//!
//! Read-only access to the institution's records. Dashboards only need
//! exact-match filters, exact row counts and the enrollment to course join,
//! so that is all the [`RecordStore`] trait exposes.

mod postgres;

pub use postgres::PgRecordStore;

use crate::domain::{AttendanceStatus, Course, Profile, Role, ValidationError};
use crate::error::error_chain_fmt;
use std::future::Future;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("Record store returned an invalid record.")]
    InvalidRecord(#[from] ValidationError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Equality filters on the `attendance` collection. `None` fields do not filter.
#[derive(Debug, Default, Clone)]
pub struct AttendanceFilter {
    pub student_id: Option<Uuid>,
    /// Matches records whose course is in the list.
    pub course_ids: Option<Vec<Uuid>>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    pub fn for_student(student_id: Uuid) -> Self {
        Self {
            student_id: Some(student_id),
            ..Self::default()
        }
    }

    pub fn for_courses(course_ids: &[Uuid]) -> Self {
        Self {
            course_ids: Some(course_ids.to_vec()),
            ..Self::default()
        }
    }

    pub fn present(mut self) -> Self {
        self.status = Some(AttendanceStatus::Present);
        self
    }
}

pub trait RecordStore {
    fn get_profile(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<Profile>>> + Send;

    fn count_profiles(&self, role: Role) -> impl Future<Output = StoreResult<u64>> + Send;

    fn count_courses(&self) -> impl Future<Output = StoreResult<u64>> + Send;

    fn count_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> impl Future<Output = StoreResult<u64>> + Send;

    fn courses_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> impl Future<Output = StoreResult<Vec<Course>>> + Send;

    /// Courses joined through the student's enrollments.
    fn enrolled_courses(
        &self,
        student_id: Uuid,
    ) -> impl Future<Output = StoreResult<Vec<Course>>> + Send;

    /// Distinct students enrolled in any of `course_ids`.
    fn count_enrolled_students(
        &self,
        course_ids: &[Uuid],
    ) -> impl Future<Output = StoreResult<u64>> + Send;
}
