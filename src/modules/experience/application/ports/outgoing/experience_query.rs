use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Newest first (start date descending, then display order).
    /// `limit` takes the first rows of that ordering.
    async fn list(&self, limit: Option<u64>) -> Result<Vec<ExperienceRecord>, ExperienceQueryError>;
}
