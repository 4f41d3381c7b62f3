use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::Authentication;
use crate::error::AppError;
use crate::ports::LoginMember;

/// Member attached to the request by the token gate.
///
/// Handlers behind `TokenAuthentication` take this to learn who is calling.
/// Without the gate (or on a public path) extraction fails with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedMember(pub LoginMember);

impl AuthenticatedMember {
    pub fn into_inner(self) -> LoginMember {
        self.0
    }
}

impl FromRequest for AuthenticatedMember {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let member = req
            .extensions()
            .get::<Authentication>()
            .map(|authentication| AuthenticatedMember(authentication.principal().clone()))
            .ok_or_else(AppError::unauthorized);
        ready(member)
    }
}
