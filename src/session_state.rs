//! src/session_state.rs
//!
//! The session only carries the id of the signed-in profile. Role and name
//! are loaded from the record store on every protected request, so a role
//! change or a removed profile takes effect without signing in again.

use crate::error::{error_chain_fmt, AosResult};
use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

#[derive(thiserror::Error)]
pub enum SessionError {
    #[error("The user has not logged in.")]
    UserNotLoggedIn,
    #[error("No profile found for the logged in user.")]
    UserNotFound,
    #[error(transparent)]
    SessionInsertError(#[from] actix_session::SessionInsertError),
    #[error(transparent)]
    SessionGetError(#[from] actix_session::SessionGetError),
}

impl std::fmt::Debug for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct TypedSession(Session);

impl TypedSession {
    const PROFILE_ID_KEY: &'static str = "profile_id";

    /// Start a fresh session for `profile_id`. The session key is rotated
    /// so an id issued before login can not be reused afterwards.
    pub fn sign_in(&self, profile_id: Uuid) -> AosResult<()> {
        self.0.renew();
        self.0
            .insert(Self::PROFILE_ID_KEY, profile_id)
            .map_err(SessionError::from)?;
        Ok(())
    }

    /// Id of the signed-in profile, `None` for anonymous visitors.
    pub fn profile_id(&self) -> AosResult<Option<Uuid>> {
        let profile_id = self
            .0
            .get(Self::PROFILE_ID_KEY)
            .map_err(SessionError::from)?;
        Ok(profile_id)
    }

    /// Remove the state from the store and clear the cookie.
    pub fn sign_out(self) {
        self.0.purge();
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
