//! src/dashboard/student.rs

use crate::dashboard::{count_or_warn, courses_or_warn};
use crate::domain::{Course, Profile};
use crate::stats::{aggregate_student_stats, StudentCounts, StudentStats};
use crate::store::{AttendanceFilter, RecordStore};

#[derive(Debug)]
pub struct StudentDashboard {
    pub stats: StudentStats,
    pub courses: Vec<Course>,
}

#[tracing::instrument(
    name = "Load student dashboard",
    skip(store, student),
    fields(student_id = %student.id)
)]
pub async fn load_student_dashboard<S: RecordStore>(
    store: &S,
    student: &Profile,
) -> StudentDashboard {
    let courses = courses_or_warn(
        store.enrolled_courses(student.id).await,
        "enrolled courses",
    );
    let mut counts = StudentCounts {
        enrolled_courses: courses.as_ref().map(|c| c.len() as u64),
        ..StudentCounts::default()
    };
    match &courses {
        Some(courses) if !courses.is_empty() => {
            let all_attendance = AttendanceFilter::for_student(student.id);
            let present_attendance = AttendanceFilter::for_student(student.id).present();
            let (total, present) = tokio::join!(
                store.count_attendance(&all_attendance),
                store.count_attendance(&present_attendance),
            );
            counts.total_attendance = count_or_warn(total, "attendance records");
            counts.present_attendance = count_or_warn(present, "present attendance records");
        }
        // not enrolled: no attendance to look up
        Some(_) => {
            counts.total_attendance = Some(0);
            counts.present_attendance = Some(0);
        }
        // enrollment lookup failed and is already reported
        None => {}
    }
    StudentDashboard {
        stats: aggregate_student_stats(counts),
        courses: courses.unwrap_or_default(),
    }
}
