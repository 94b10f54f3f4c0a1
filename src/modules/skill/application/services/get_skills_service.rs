use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillRecord;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillListFilter, SkillQuery};

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, filter: SkillListFilter) -> Result<Vec<SkillRecord>, GetSkillsError> {
        self.query.list(filter).await.map_err(GetSkillsError::from)
    }
}
