//! src/stats.rs
//!
//! Dashboard statistics: raw counts in, role-scoped summary figures out.
//! No I/O happens here; callers pre-fetch every count.
//!
//! Counts are passed as `Option<u64>`. `None` means the record store query
//! failed, `Some(0)` is a confirmed zero. Failed counts degrade to zero and
//! mark the resulting snapshot as `degraded`.

/// Attendance below this percentage is reported as low. Fixed policy.
pub const LOW_ATTENDANCE_THRESHOLD: u8 = 75;

/// Percentage of `present` in `total`, rounded half away from zero.
///
/// Returns 0 if `total` is 0. A `present` larger than `total` clamps to 100.
pub fn attendance_percentage(present: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let present = present.min(total) as u128;
    let total = total as u128;
    // floor(present * 100 / total + 1/2), all in integers
    ((present * 200 + total) / (total * 2)) as u8
}

pub fn is_low_attendance(percentage: u8) -> bool {
    percentage < LOW_ATTENDANCE_THRESHOLD
}

/// Degrade a possibly failed count to zero, remembering that it happened.
fn or_zero(count: Option<u64>, degraded: &mut bool) -> u64 {
    match count {
        Some(count) => count,
        None => {
            *degraded = true;
            0
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AdminCounts {
    pub student_count: Option<u64>,
    pub teacher_count: Option<u64>,
    pub course_count: Option<u64>,
    pub total_attendance: Option<u64>,
    pub present_attendance: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_courses: u64,
    pub avg_attendance: u8,
    pub degraded: bool,
}

pub fn aggregate_admin_stats(counts: AdminCounts) -> AdminStats {
    let mut degraded = false;
    let total_students = or_zero(counts.student_count, &mut degraded);
    let total_teachers = or_zero(counts.teacher_count, &mut degraded);
    let total_courses = or_zero(counts.course_count, &mut degraded);
    let total = or_zero(counts.total_attendance, &mut degraded);
    let present = or_zero(counts.present_attendance, &mut degraded);
    AdminStats {
        total_students,
        total_teachers,
        total_courses,
        avg_attendance: attendance_percentage(present, total),
        degraded,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TeacherCounts {
    pub course_count: Option<u64>,
    /// Distinct students enrolled in any of the teacher's courses.
    pub student_count: Option<u64>,
    pub total_attendance: Option<u64>,
    pub present_attendance: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TeacherStats {
    pub total_courses: u64,
    pub total_students: u64,
    pub avg_attendance: u8,
    pub degraded: bool,
}

pub fn aggregate_teacher_stats(counts: TeacherCounts) -> TeacherStats {
    let mut degraded = false;
    let total_courses = or_zero(counts.course_count, &mut degraded);
    let total_students = or_zero(counts.student_count, &mut degraded);
    let total = or_zero(counts.total_attendance, &mut degraded);
    let present = or_zero(counts.present_attendance, &mut degraded);
    TeacherStats {
        total_courses,
        total_students,
        avg_attendance: attendance_percentage(present, total),
        degraded,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StudentCounts {
    pub enrolled_courses: Option<u64>,
    pub total_attendance: Option<u64>,
    pub present_attendance: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StudentStats {
    pub enrolled_courses: u64,
    pub attendance: u8,
    pub low_attendance: bool,
    pub degraded: bool,
}

pub fn aggregate_student_stats(counts: StudentCounts) -> StudentStats {
    let mut degraded = false;
    let enrolled_courses = or_zero(counts.enrolled_courses, &mut degraded);
    let total = or_zero(counts.total_attendance, &mut degraded);
    let present = or_zero(counts.present_attendance, &mut degraded);
    let attendance = attendance_percentage(present, total);
    StudentStats {
        enrolled_courses,
        attendance,
        // no records yet is not low attendance
        low_attendance: total > 0 && is_low_attendance(attendance),
        degraded,
    }
}
