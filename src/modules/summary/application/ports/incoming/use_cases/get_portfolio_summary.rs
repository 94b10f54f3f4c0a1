use async_trait::async_trait;
use thiserror::Error;

use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;
use crate::modules::profile::application::ports::outgoing::PersonalInfoQueryError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::skill::application::ports::outgoing::SkillQueryError;
use crate::modules::summary::application::domain::entities::PortfolioSummary;

#[derive(Debug, Clone, Error)]
pub enum GetPortfolioSummaryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PersonalInfoQueryError> for GetPortfolioSummaryError {
    fn from(err: PersonalInfoQueryError) -> Self {
        GetPortfolioSummaryError::QueryFailed(format!("personal info: {}", err))
    }
}

impl From<ProjectQueryError> for GetPortfolioSummaryError {
    fn from(err: ProjectQueryError) -> Self {
        GetPortfolioSummaryError::QueryFailed(format!("projects: {}", err))
    }
}

impl From<SkillQueryError> for GetPortfolioSummaryError {
    fn from(err: SkillQueryError) -> Self {
        GetPortfolioSummaryError::QueryFailed(format!("skills: {}", err))
    }
}

impl From<ExperienceQueryError> for GetPortfolioSummaryError {
    fn from(err: ExperienceQueryError) -> Self {
        GetPortfolioSummaryError::QueryFailed(format!("experience: {}", err))
    }
}

#[async_trait]
pub trait GetPortfolioSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioSummary, GetPortfolioSummaryError>;
}
