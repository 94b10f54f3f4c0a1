use async_trait::async_trait;
use thiserror::Error;

use crate::modules::contact::application::domain::entities::ContactMessageRecord;

/// Already validated fields for a message about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError>;
}
