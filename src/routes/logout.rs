//! src/routes/logout.rs

use crate::error::AosResult;
use crate::session_state::TypedSession;
use crate::utils::to_login;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;

/// Terminate the session, then notify, then navigate to the login form.
pub async fn log_out(session: TypedSession) -> AosResult<HttpResponse> {
    session.sign_out();
    FlashMessage::info("Logged out successfully").send();
    Ok(to_login())
}
