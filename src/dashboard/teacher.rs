//! src/dashboard/teacher.rs

use crate::dashboard::{count_or_warn, courses_or_warn};
use crate::domain::{Course, Profile};
use crate::stats::{aggregate_teacher_stats, TeacherCounts, TeacherStats};
use crate::store::{AttendanceFilter, RecordStore};
use uuid::Uuid;

#[derive(Debug)]
pub struct TeacherDashboard {
    pub stats: TeacherStats,
    pub courses: Vec<Course>,
}

#[tracing::instrument(
    name = "Load teacher dashboard",
    skip(store, teacher),
    fields(teacher_id = %teacher.id)
)]
pub async fn load_teacher_dashboard<S: RecordStore>(
    store: &S,
    teacher: &Profile,
) -> TeacherDashboard {
    let courses = courses_or_warn(
        store.courses_by_teacher(teacher.id).await,
        "courses of teacher",
    );
    let Some(courses) = courses else {
        return TeacherDashboard {
            stats: aggregate_teacher_stats(TeacherCounts::default()),
            courses: Vec::new(),
        };
    };
    let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
    let mut counts = TeacherCounts {
        course_count: Some(courses.len() as u64),
        ..TeacherCounts::default()
    };
    if course_ids.is_empty() {
        // nothing to look up "in" an empty list
        counts.student_count = Some(0);
        counts.total_attendance = Some(0);
        counts.present_attendance = Some(0);
    } else {
        let all_attendance = AttendanceFilter::for_courses(&course_ids);
        let present_attendance = AttendanceFilter::for_courses(&course_ids).present();
        let (students, total, present) = tokio::join!(
            store.count_enrolled_students(&course_ids),
            store.count_attendance(&all_attendance),
            store.count_attendance(&present_attendance),
        );
        counts.student_count = count_or_warn(students, "enrolled students");
        counts.total_attendance = count_or_warn(total, "attendance records");
        counts.present_attendance = count_or_warn(present, "present attendance records");
    }
    TeacherDashboard {
        stats: aggregate_teacher_stats(counts),
        courses,
    }
}
