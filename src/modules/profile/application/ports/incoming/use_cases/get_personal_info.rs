use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoRecord;
use crate::modules::profile::application::ports::outgoing::PersonalInfoQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPersonalInfoError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PersonalInfoQueryError> for GetPersonalInfoError {
    fn from(err: PersonalInfoQueryError) -> Self {
        match err {
            PersonalInfoQueryError::DatabaseError(msg) => GetPersonalInfoError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetPersonalInfoUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PersonalInfoRecord>, GetPersonalInfoError>;
}
