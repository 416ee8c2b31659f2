use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use crate::{entities::token::Principal, errors::AuthError};

/// Extractor for the principal the auth guard attached to the request.
/// Returns 401 if the guard did not run or rejected the token.
/// Usage: Add `principal: AuthPrincipal` as a parameter to your handler function.
#[derive(Debug)]
pub struct AuthPrincipal(pub Principal);

impl FromRequest for AuthPrincipal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Principal>() {
            Some(principal) => ready(Ok(AuthPrincipal(*principal))),
            None => ready(Err(AuthError::MissingToken.into())),
        }
    }
}
