//! src/routes/dashboard.rs

use crate::authentication::Identity;
use crate::dashboard::{load_admin_dashboard, load_student_dashboard, load_teacher_dashboard};
use crate::domain::{Course, Profile, Role};
use crate::navigation::{menu_items, MenuItem};
use crate::stats::{AdminStats, StudentStats, TeacherStats, LOW_ATTENDANCE_THRESHOLD};
use crate::store::PgRecordStore;
use actix_web::{web, HttpResponse};
use askama_actix::{Template, TemplateToResponse};

/// Sidebar content shared by all dashboards.
struct Shell {
    full_name: String,
    role: &'static str,
    menu: Vec<MenuItem>,
}

impl From<&Profile> for Shell {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            role: profile.role.label(),
            menu: menu_items(profile.role),
        }
    }
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
struct AdminDashboardTemplate {
    shell: Shell,
    stats: AdminStats,
}

#[derive(Template)]
#[template(path = "teacher_dashboard.html")]
struct TeacherDashboardTemplate {
    shell: Shell,
    stats: TeacherStats,
    courses: Vec<Course>,
}

#[derive(Template)]
#[template(path = "student_dashboard.html")]
struct StudentDashboardTemplate {
    shell: Shell,
    stats: StudentStats,
    courses: Vec<Course>,
    threshold: u8,
}

#[tracing::instrument(
    name = "Render dashboard",
    skip_all,
    fields(user_id = %&*identity, role = %identity.role)
)]
pub async fn dashboard(
    store: web::Data<PgRecordStore>,
    identity: web::ReqData<Identity>,
) -> HttpResponse {
    let profile = identity.into_inner().into_inner();
    let shell = Shell::from(&profile);
    match profile.role {
        Role::Admin => {
            let dashboard = load_admin_dashboard(store.get_ref()).await;
            AdminDashboardTemplate {
                shell,
                stats: dashboard.stats,
            }
            .to_response()
        }
        Role::Teacher => {
            let dashboard = load_teacher_dashboard(store.get_ref(), &profile).await;
            TeacherDashboardTemplate {
                shell,
                stats: dashboard.stats,
                courses: dashboard.courses,
            }
            .to_response()
        }
        Role::Student => {
            let dashboard = load_student_dashboard(store.get_ref(), &profile).await;
            StudentDashboardTemplate {
                shell,
                stats: dashboard.stats,
                courses: dashboard.courses,
                threshold: LOW_ATTENDANCE_THRESHOLD,
            }
            .to_response()
        }
    }
}
