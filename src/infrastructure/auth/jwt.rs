use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use uuid::Uuid;

use crate::entities::token::{Claims, ClaimsUser, Principal};
use crate::errors::AuthError;
use crate::repositories::token::TokenService;
use crate::settings::{AppConfig, JwtKeys};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn with_secret(secret: &str, expiration: Duration) -> Self {
        JwtService {
            keys: JwtKeys::from_secret(secret),
            expiration,
        }
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(JWT_ALGORITHM);
        // expiry is checked against the caller's clock in verify_at
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl TokenService for JwtService {
    fn issue_at(&self, account_id: &Uuid, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            user: ClaimsUser { id: account_id.to_string() },
            iat: now.timestamp(),
            exp: (now + self.expiration).timestamp(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, AuthError> {
        let claims = decode::<Claims>(token, &self.keys.decoding, &Self::validation())?.claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::InvalidToken);
        }

        let account_id = Uuid::parse_str(&claims.user.id).map_err(|_| AuthError::InvalidToken)?;
        Ok(Principal { account_id })
    }
}
