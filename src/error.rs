//! src/error.rs

use crate::authentication::CredentialsError;
use crate::session_state::SessionError;
use crate::store::StoreError;
use crate::utils::to_login;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type AosResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error("Failed Login Authentication")]
    AuthError(#[source] anyhow::Error),
    #[error(transparent)]
    SessionError(#[from] SessionError),
    #[error("Failed to read records")]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::AuthError(_) => StatusCode::UNAUTHORIZED,
            Error::SessionError(SessionError::UserNotLoggedIn)
            | Error::SessionError(SessionError::UserNotFound) => StatusCode::SEE_OTHER,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.status_code() {
            // anonymous or stale session: back to the login form
            StatusCode::SEE_OTHER => to_login(),
            status => HttpResponse::new(status),
        }
    }
}

impl From<CredentialsError> for Error {
    fn from(e: CredentialsError) -> Self {
        match e {
            CredentialsError::UnexpectedError(err) => Error::UnexpectedError(err),
            e => Error::AuthError(e.into()),
        }
    }
}
