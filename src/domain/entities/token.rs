use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token payload, shaped `{"user": {"id": ...}, "iat": ..., "exp": ...}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub user: ClaimsUser,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClaimsUser {
    pub id: String,
}

/// The authenticated account a verified token speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub account_id: Uuid,
}
