//! src/store/postgres.rs

use crate::domain::{Course, Profile, Role};
use crate::store::{AttendanceFilter, RecordStore, StoreResult};
use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `COUNT(*)` is a BIGINT and never negative.
fn to_count(count: i64) -> u64 {
    count.max(0) as u64
}

impl RecordStore for PgRecordStore {
    #[tracing::instrument(name = "Get profile", skip(self))]
    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<Profile>> {
        let row: Option<(Uuid, String, String)> = sqlx::query_as(
            r#"
            SELECT id, full_name, role
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to perform query to retrieve a profile.")?;
        let profile = match row {
            Some((id, full_name, role)) => Some(Profile {
                id,
                full_name,
                role: Role::try_from(role)?,
            }),
            None => None,
        };
        Ok(profile)
    }

    #[tracing::instrument(name = "Count profiles by role", skip(self))]
    async fn count_profiles(&self, role: Role) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = $1")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .context("Failed to count profiles.")?;
        Ok(to_count(count))
    }

    #[tracing::instrument(name = "Count courses", skip(self))]
    async fn count_courses(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count courses.")?;
        Ok(to_count(count))
    }

    #[tracing::instrument(name = "Count attendance records", skip(self))]
    async fn count_attendance(&self, filter: &AttendanceFilter) -> StoreResult<u64> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM attendance WHERE TRUE");
        if let Some(student_id) = filter.student_id {
            query.push(" AND student_id = ").push_bind(student_id);
        }
        if let Some(course_ids) = &filter.course_ids {
            query
                .push(" AND course_id = ANY(")
                .push_bind(course_ids.clone())
                .push(")");
        }
        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }
        let count: i64 = query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .context("Failed to count attendance records.")?;
        Ok(to_count(count))
    }

    #[tracing::instrument(name = "Get courses of teacher", skip(self))]
    async fn courses_by_teacher(&self, teacher_id: Uuid) -> StoreResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, name, code, teacher_id
            FROM courses
            WHERE teacher_id = $1
            ORDER BY code
            "#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to read courses of teacher.")?;
        Ok(courses)
    }

    #[tracing::instrument(name = "Get enrolled courses of student", skip(self))]
    async fn enrolled_courses(&self, student_id: Uuid) -> StoreResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.name, c.code, c.teacher_id
            FROM enrollments e
            JOIN courses c ON c.id = e.course_id
            WHERE e.student_id = $1
            ORDER BY c.code
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to read enrolled courses of student.")?;
        Ok(courses)
    }

    #[tracing::instrument(name = "Count enrolled students", skip(self))]
    async fn count_enrolled_students(&self, course_ids: &[Uuid]) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT student_id)
            FROM enrollments
            WHERE course_id = ANY($1)
            "#,
        )
        .bind(course_ids)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count enrolled students.")?;
        Ok(to_count(count))
    }
}
