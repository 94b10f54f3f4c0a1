use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceUseCase;
use crate::modules::media::application::domain::MediaConfig;
use crate::modules::profile::application::ports::incoming::use_cases::GetPersonalInfoUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsUseCase, GetSingleProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::modules::summary::application::ports::incoming::use_cases::GetPortfolioSummaryUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    media: MediaConfig,
    personal_info: Arc<dyn GetPersonalInfoUseCase + Send + Sync>,
    skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    experience: Arc<dyn GetExperienceUseCase + Send + Sync>,
    project: ProjectUseCases,
    submit_contact_message: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    portfolio_summary: Arc<dyn GetPortfolioSummaryUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            media: MediaConfig::default(),
            personal_info: Arc::new(StubGetPersonalInfoUseCase),
            skills: Arc::new(StubGetSkillsUseCase),
            experience: Arc::new(StubGetExperienceUseCase),
            project: ProjectUseCases {
                get_list: Arc::new(DefaultStubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase::not_found()),
            },
            submit_contact_message: Arc::new(StubSubmitContactMessageUseCase),
            portfolio_summary: Arc::new(StubGetPortfolioSummaryUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_personal_info(
        mut self,
        uc: impl GetPersonalInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.personal_info = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skills = Arc::new(uc);
        self
    }

    pub fn with_get_experience(
        mut self,
        uc: impl GetExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_submit_contact_message(
        mut self,
        uc: impl SubmitContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact_message = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio_summary(
        mut self,
        uc: impl GetPortfolioSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio_summary = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            media: self.media,
            personal_info: self.personal_info,
            skills: self.skills,
            experience: self.experience,
            project: self.project,
            submit_contact_message: self.submit_contact_message,
            portfolio_summary: self.portfolio_summary,
        })
    }
}
