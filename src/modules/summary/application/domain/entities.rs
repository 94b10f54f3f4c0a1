use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::profile::application::domain::entities::PersonalInfoRecord;
use crate::modules::project::application::domain::entities::ProjectRecord;
use crate::modules::skill::application::domain::entities::SkillRecord;

/// Landing-page snapshot assembled from the other modules' reads.
#[derive(Debug, Clone)]
pub struct PortfolioSummary {
    pub personal_info: Option<PersonalInfoRecord>,
    pub featured_projects: Vec<ProjectRecord>,
    pub featured_skills: Vec<SkillRecord>,
    pub recent_experience: Vec<ExperienceRecord>,
}
