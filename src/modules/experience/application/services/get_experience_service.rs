use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;

pub struct GetExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperienceUseCase for GetExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, GetExperienceError> {
        self.query.list(None).await.map_err(GetExperienceError::from)
    }
}
