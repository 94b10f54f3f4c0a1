// src/modules/skill/application/ports/outgoing/skill_query.rs

use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{SkillCategory, SkillRecord};
use crate::shared::filter::CodeFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillListFilter {
    pub category: CodeFilter<SkillCategory>,
    pub featured_only: bool,
}

impl SkillListFilter {
    pub fn featured() -> Self {
        Self {
            category: CodeFilter::Any,
            featured_only: true,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Skills ordered by (category, order, name).
    async fn list(&self, filter: SkillListFilter) -> Result<Vec<SkillRecord>, SkillQueryError>;
}
