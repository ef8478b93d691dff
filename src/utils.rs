//! src/utils.rs

use actix_web::{http::header::LOCATION, HttpResponse};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// 303 to `location`, the browser follows with a GET.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn to_login() -> HttpResponse {
    see_other(LOGIN_PATH)
}
