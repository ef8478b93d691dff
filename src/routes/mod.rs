//! src/routes/mod.rs

mod dashboard;
mod generate_report;
mod health_check;
mod home;
mod login;
mod logout;

pub use dashboard::dashboard;
pub use generate_report::*;
pub use health_check::health_check;
pub use home::home;
pub use login::*;
pub use logout::log_out;
