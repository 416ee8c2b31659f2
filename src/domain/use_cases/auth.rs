use validator::Validate;

use crate::auth::password::{hash_password, verify_dummy, verify_password};
use crate::entities::account::{Account, LoginRequest, LoginResponse};
use crate::entities::token::Principal;
use crate::errors::{AppError, AuthError};
use crate::repositories::account::AccountRepository;
use crate::repositories::token::TokenService;

pub struct AuthHandler<R, T>
where
    R: AccountRepository,
    T: TokenService,
{
    pub account_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: AccountRepository,
    T: TokenService,
{
    pub fn new(account_repo: R, token_service: T) -> Self {
        AuthHandler {
            account_repo,
            token_service,
        }
    }

    /// Exchanges a username and password for a signed token.
    ///
    /// An unknown username and a wrong password fail with the same
    /// `InvalidCredentials` error, after the same amount of hashing work.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate().map_err(AuthError::from)?;

        let account = match self.account_repo.find_account_by_username(&request.username).await? {
            Some(account) => account,
            None => {
                verify_dummy(&request.password);
                tracing::info!("Login rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(&request.password, &account.password_hash)? {
            tracing::info!("Login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(&account.id)?;

        tracing::info!(account_id = %account.id, "Admin logged in successfully");
        Ok(LoginResponse { token })
    }

    /// Confirms the account a verified token names still exists.
    pub async fn authorize(&self, principal: &Principal) -> Result<Principal, AppError> {
        match self.account_repo.find_account_by_id(&principal.account_id).await? {
            Some(_) => Ok(*principal),
            None => {
                tracing::warn!(account_id = %principal.account_id, "Token names a missing account");
                Err(AuthError::InvalidToken.into())
            }
        }
    }

    /// Creates the admin account unless one with this username exists.
    /// Returns whether an account was created.
    pub async fn seed_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if self.account_repo.find_account_by_username(username).await?.is_some() {
            tracing::info!(username, "Admin account already exists");
            return Ok(false);
        }

        let account = Account::new(username, hash_password(password)?);
        self.account_repo.create_account(&account).await?;

        tracing::info!(username, "Admin account created");
        Ok(true)
    }
}
