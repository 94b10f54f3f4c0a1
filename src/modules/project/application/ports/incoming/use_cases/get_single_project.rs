use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectRecord;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetSingleProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetSingleProjectError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<ProjectRecord, GetSingleProjectError>;
}
