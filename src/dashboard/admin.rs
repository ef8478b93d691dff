//! src/dashboard/admin.rs

use crate::dashboard::count_or_warn;
use crate::domain::Role;
use crate::stats::{aggregate_admin_stats, AdminCounts, AdminStats};
use crate::store::{AttendanceFilter, RecordStore};

#[derive(Debug)]
pub struct AdminDashboard {
    pub stats: AdminStats,
}

#[tracing::instrument(name = "Load admin dashboard", skip(store))]
pub async fn load_admin_dashboard<S: RecordStore>(store: &S) -> AdminDashboard {
    let all_attendance = AttendanceFilter::default();
    let present_attendance = AttendanceFilter::default().present();
    let (students, teachers, courses, total, present) = tokio::join!(
        store.count_profiles(Role::Student),
        store.count_profiles(Role::Teacher),
        store.count_courses(),
        store.count_attendance(&all_attendance),
        store.count_attendance(&present_attendance),
    );
    let stats = aggregate_admin_stats(AdminCounts {
        student_count: count_or_warn(students, "students"),
        teacher_count: count_or_warn(teachers, "teachers"),
        course_count: count_or_warn(courses, "courses"),
        total_attendance: count_or_warn(total, "attendance records"),
        present_attendance: count_or_warn(present, "present attendance records"),
    });
    AdminDashboard { stats }
}
