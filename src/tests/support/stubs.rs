use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessageRecord;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::modules::profile::application::domain::entities::PersonalInfoRecord;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPersonalInfoError, GetPersonalInfoUseCase,
};
use crate::modules::project::application::domain::entities::ProjectRecord;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::modules::skill::application::domain::entities::SkillRecord;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillListFilter;
use crate::modules::summary::application::domain::entities::PortfolioSummary;
use crate::modules::summary::application::ports::incoming::use_cases::{
    GetPortfolioSummaryError, GetPortfolioSummaryUseCase,
};

// Defaults for use cases a test does not exercise: empty reads, and a
// failing write so an unexpected submit is visible.

#[derive(Default, Clone)]
pub struct StubGetPersonalInfoUseCase;

#[async_trait]
impl GetPersonalInfoUseCase for StubGetPersonalInfoUseCase {
    async fn execute(&self) -> Result<Vec<PersonalInfoRecord>, GetPersonalInfoError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self, _filter: SkillListFilter) -> Result<Vec<SkillRecord>, GetSkillsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetExperienceUseCase;

#[async_trait]
impl GetExperienceUseCase for StubGetExperienceUseCase {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, GetExperienceError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
    ) -> Result<Vec<ProjectRecord>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<ProjectRecord, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<ProjectRecord, GetSingleProjectError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContactMessageUseCase;

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        _command: ContactMessageCommand,
    ) -> Result<ContactMessageRecord, SubmitContactMessageError> {
        Err(SubmitContactMessageError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

#[derive(Default, Clone)]
pub struct StubGetPortfolioSummaryUseCase;

#[async_trait]
impl GetPortfolioSummaryUseCase for StubGetPortfolioSummaryUseCase {
    async fn execute(&self) -> Result<PortfolioSummary, GetPortfolioSummaryError> {
        Ok(PortfolioSummary {
            personal_info: None,
            featured_projects: vec![],
            featured_skills: vec![],
            recent_experience: vec![],
        })
    }
}
