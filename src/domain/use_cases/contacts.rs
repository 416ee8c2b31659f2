use validator::Validate;

use crate::{
    entities::{
        contact::{ContactMessage, NewContactMessage},
        response::MessageResponse,
    },
    errors::AppError,
    repositories::contact::ContactRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Stores a public "contact me" submission as unread
    pub async fn submit_contact_message(
        &self,
        request: NewContactMessage
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let msg = self.contact_repo
            .insert_contact_message(&request.prepare_for_insert())
            .await?;

        tracing::info!(message_id = %msg.id, "Contact message received");
        Ok(msg)
    }

    /// Lists all contact messages, newest first
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }

    /// Marks a message read. Repeating it is harmless.
    pub async fn mark_read(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id)?;

        self.contact_repo.mark_contact_message_read(&valid_id).await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    /// Deletes a message. Deleting an id that does not exist also succeeds.
    pub async fn delete_contact_message(&self, id: &str) -> Result<MessageResponse, AppError> {
        let valid_id = valid_uuid(id)?;

        if !self.contact_repo.delete_contact_message(&valid_id).await? {
            tracing::debug!(message_id = %valid_id, "Delete of missing contact message");
        }

        Ok(MessageResponse::new("Message deleted"))
    }
}
