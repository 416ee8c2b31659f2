use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{entities::token::Principal, errors::AuthError};

pub trait TokenService: Send + Sync {
    /// Signs a token for the account, expiring one lifetime after `now`.
    fn issue_at(&self, account_id: &Uuid, now: DateTime<Utc>) -> Result<String, AuthError>;

    /// Verifies signature and expiry against `now`.
    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, AuthError>;

    fn issue(&self, account_id: &Uuid) -> Result<String, AuthError> {
        self.issue_at(account_id, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        self.verify_at(token, Utc::now())
    }
}
