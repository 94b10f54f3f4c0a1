use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillRecord;
use crate::modules::skill::application::ports::outgoing::{SkillListFilter, SkillQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSkillsError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::DatabaseError(msg) => GetSkillsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self, filter: SkillListFilter) -> Result<Vec<SkillRecord>, GetSkillsError>;
}
