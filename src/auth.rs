//! Session-backed request authentication.
//!
//! Credential verification lives in `services::auth`; this module only turns
//! the session identity established at login into a typed owner id for
//! handlers to consume.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest};

use crate::domain::types::UserId;

/// The authenticated owner of the data touched by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user_id = Identity::from_request(req, payload)
            .into_inner()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|raw| raw.parse::<i32>().ok())
            .and_then(|raw| UserId::new(raw).ok());

        match user_id {
            Some(user_id) => ready(Ok(Self { user_id })),
            None => ready(Err(ErrorUnauthorized("authentication required"))),
        }
    }
}
