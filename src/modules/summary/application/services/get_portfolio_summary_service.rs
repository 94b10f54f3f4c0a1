use async_trait::async_trait;

use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::profile::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery,
};
use crate::modules::skill::application::ports::outgoing::{SkillListFilter, SkillQuery};
use crate::modules::summary::application::domain::entities::PortfolioSummary;
use crate::modules::summary::application::ports::incoming::use_cases::{
    GetPortfolioSummaryError, GetPortfolioSummaryUseCase,
};

pub const SUMMARY_PROJECT_LIMIT: u64 = 3;
pub const SUMMARY_EXPERIENCE_LIMIT: u64 = 3;

pub struct GetPortfolioSummaryService<P, J, S, E>
where
    P: PersonalInfoQuery,
    J: ProjectQuery,
    S: SkillQuery,
    E: ExperienceQuery,
{
    personal_info: P,
    projects: J,
    skills: S,
    experience: E,
}

impl<P, J, S, E> GetPortfolioSummaryService<P, J, S, E>
where
    P: PersonalInfoQuery,
    J: ProjectQuery,
    S: SkillQuery,
    E: ExperienceQuery,
{
    pub fn new(personal_info: P, projects: J, skills: S, experience: E) -> Self {
        Self {
            personal_info,
            projects,
            skills,
            experience,
        }
    }
}

#[async_trait]
impl<P, J, S, E> GetPortfolioSummaryUseCase for GetPortfolioSummaryService<P, J, S, E>
where
    P: PersonalInfoQuery + Send + Sync,
    J: ProjectQuery + Send + Sync,
    S: SkillQuery + Send + Sync,
    E: ExperienceQuery + Send + Sync,
{
    // The first failing read aborts the whole summary.
    async fn execute(&self) -> Result<PortfolioSummary, GetPortfolioSummaryError> {
        let personal_info = self.personal_info.first_active().await?;

        let featured_projects = self
            .projects
            .list(ProjectListFilter::featured(SUMMARY_PROJECT_LIMIT))
            .await?;

        let featured_skills = self.skills.list(SkillListFilter::featured()).await?;

        let recent_experience = self
            .experience
            .list(Some(SUMMARY_EXPERIENCE_LIMIT))
            .await?;

        Ok(PortfolioSummary {
            personal_info,
            featured_projects,
            featured_skills,
            recent_experience,
        })
    }
}
