use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PersonalInfoQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PersonalInfoQuery: Send + Sync {
    /// Active records, oldest first.
    async fn list_active(&self) -> Result<Vec<PersonalInfoRecord>, PersonalInfoQueryError>;

    async fn first_active(&self) -> Result<Option<PersonalInfoRecord>, PersonalInfoQueryError>;
}
