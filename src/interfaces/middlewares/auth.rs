use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error, HttpMessage, ResponseError,
};
use chrono::{DateTime, Utc};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    auth::jwt::JwtService,
    entities::token::Principal,
    errors::AuthError,
    repositories::token::TokenService,
};

/// Header carrying the credential token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Verifies the `x-auth-token` header on every non-public route and attaches
/// the resulting [`Principal`] to the request extensions.
pub struct AuthGuard {
    jwt_service: JwtService,
}

impl AuthGuard {
    pub fn new(jwt_service: JwtService) -> Self {
        AuthGuard { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthGuardService {
            service: Rc::new(service),
            jwt_service: Rc::new(self.jwt_service.clone()),
        })
    }
}

pub struct AuthGuardService<S> {
    service: Rc<S>,
    jwt_service: Rc<JwtService>,
}

impl<S, B> Service<ServiceRequest> for AuthGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_service = Rc::clone(&self.jwt_service);

        Box::pin(async move {
            if is_public_route(req.path(), req.method()) {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let token = extract_token(&req);
            let principal = match authenticate(token.as_deref(), &*jwt_service, Utc::now()) {
                Ok(principal) => principal,
                Err(e) => {
                    tracing::warn!(path = %req.path(), "Rejected request: {}", e);
                    return Ok(reject(req, e));
                }
            };

            req.extensions_mut().insert(principal);
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// The guard decision: a pure function of the presented token, the signing
/// service and the clock.
pub fn authenticate<T: TokenService + ?Sized>(
    token: Option<&str>,
    tokens: &T,
    now: DateTime<Utc>,
) -> Result<Principal, AuthError> {
    let token = token.ok_or(AuthError::MissingToken)?;
    tokens.verify_at(token, now)
}

fn is_public_route(path: &str, method: &Method) -> bool {
    if *method == Method::OPTIONS {
        return true;
    }

    matches!(
        (method.as_str(), path),
        ("GET", "/") |
        ("GET", "/health") |
        ("POST", "/api/auth/login") |
        ("GET", "/api/projects") |
        ("POST", "/api/contacts") |
        ("GET", "/api/settings")
    )
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTH_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn reject<B>(req: ServiceRequest, err: AuthError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(err.error_response()).map_into_right_body()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn jwt() -> JwtService {
        JwtService::with_secret("test_jwt_secret_that_is_long_enough_for_hs512_1234567890", Duration::hours(1))
    }

    #[test]
    fn missing_token_is_auth_missing() {
        assert_eq!(authenticate(None, &jwt(), Utc::now()), Err(AuthError::MissingToken));
    }

    #[test]
    fn valid_token_yields_principal() {
        let jwt = jwt();
        let account_id = Uuid::new_v4();
        let now = Utc::now();
        let token = jwt.issue_at(&account_id, now).unwrap();

        let principal = authenticate(Some(&token), &jwt, now).unwrap();
        assert_eq!(principal.account_id, account_id);
    }

    #[test]
    fn expired_token_is_auth_invalid() {
        let jwt = jwt();
        let issued = Utc::now() - Duration::hours(2);
        let token = jwt.issue_at(&Uuid::new_v4(), issued).unwrap();

        assert_eq!(authenticate(Some(&token), &jwt, Utc::now()), Err(AuthError::InvalidToken));
    }

    #[test]
    fn public_routes_match_method_and_path() {
        assert!(is_public_route("/api/projects", &Method::GET));
        assert!(!is_public_route("/api/projects", &Method::POST));
        assert!(is_public_route("/api/contacts", &Method::POST));
        assert!(!is_public_route("/api/contacts", &Method::GET));
        assert!(is_public_route("/api/settings", &Method::GET));
        assert!(!is_public_route("/api/settings", &Method::PUT));
        assert!(is_public_route("/api/settings", &Method::OPTIONS));
    }
}
