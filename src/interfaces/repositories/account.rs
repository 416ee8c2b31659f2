use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::account::Account,
    errors::AppError,
    repositories::sqlx_repo::SqlxRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn find_account_by_username(&self, username: &str) -> Result<Option<Account>, AppError>;
    async fn find_account_by_id(&self, id: &Uuid) -> Result<Option<Account>, AppError>;
    async fn create_account(&self, account: &Account) -> Result<(), AppError>;
}

#[async_trait]
impl AccountRepository for SqlxRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn find_account_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, password_hash, created_at FROM accounts WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_account_by_id(&self, id: &Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, password_hash, created_at FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create_account(&self, account: &Account) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
