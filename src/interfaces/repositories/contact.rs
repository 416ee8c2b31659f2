use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::contact::ContactMessage,
    errors::AppError,
    repositories::sqlx_repo::SqlxRepo,
};

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, read, created_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All messages, newest first.
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn insert_contact_message(&self, msg: &ContactMessage) -> Result<ContactMessage, AppError>;
    async fn mark_contact_message_read(&self, id: &Uuid) -> Result<Option<ContactMessage>, AppError>;
    /// Returns whether a record was removed.
    async fn delete_contact_message(&self, id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait]
impl ContactRepository for SqlxRepo {
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn insert_contact_message(&self, msg: &ContactMessage) -> Result<ContactMessage, AppError> {
        let stored = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            INSERT INTO contact_messages ({CONTACT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(msg.id)
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .bind(msg.read)
        .bind(msg.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn mark_contact_message_read(&self, id: &Uuid) -> Result<Option<ContactMessage>, AppError> {
        let updated = sqlx::query_as::<_, ContactMessage>(&format!(
            "UPDATE contact_messages SET read = TRUE WHERE id = $1 RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_contact_message(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
