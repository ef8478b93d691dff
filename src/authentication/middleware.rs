//! src/authentication/middleware.rs

use crate::domain::Profile;
use crate::error::Error;
use crate::session_state::{SessionError, TypedSession};
use crate::store::{PgRecordStore, RecordStore};
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, FromRequest, HttpMessage,
};
use actix_web_lab::middleware::Next;
use anyhow::anyhow;
use std::ops::Deref;

/// Resolve the session into the logged in user's profile or reject the request.
///
/// Rejected requests are redirected to `/login`.
pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    let Some(profile_id) = session.profile_id()? else {
        return Err(Error::from(SessionError::UserNotLoggedIn).into());
    };

    let store = req
        .app_data::<web::Data<PgRecordStore>>()
        .ok_or_else(|| Error::UnexpectedError(anyhow!("Record store is not registered.")))?
        .clone();
    match store.get_profile(profile_id).await.map_err(Error::from)? {
        Some(profile) => {
            req.extensions_mut().insert(Identity(profile));
            next.call(req).await
        }
        None => {
            // profile was removed while the session was alive
            session.sign_out();
            Err(Error::from(SessionError::UserNotFound).into())
        }
    }
}

/// Profile of the logged in user, attached to requests passing
/// [`reject_anonymous_users`].
#[derive(Debug, Clone)]
pub struct Identity(Profile);

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.id.fmt(f)
    }
}

impl Deref for Identity {
    type Target = Profile;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Identity {
    pub fn into_inner(self) -> Profile {
        self.0
    }
}
