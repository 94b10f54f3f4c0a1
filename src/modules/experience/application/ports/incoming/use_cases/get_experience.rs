use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperienceError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for GetExperienceError {
    fn from(err: ExperienceQueryError) -> Self {
        match err {
            ExperienceQueryError::DatabaseError(msg) => GetExperienceError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, GetExperienceError>;
}
