use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::experience::adapter::incoming::web::views::ExperienceView;
use crate::modules::media::application::domain::MediaUrlResolver;
use crate::modules::profile::adapter::incoming::web::views::PersonalInfoView;
use crate::modules::project::adapter::incoming::web::views::ProjectView;
use crate::modules::skill::adapter::incoming::web::views::SkillView;
use crate::modules::summary::application::domain::entities::PortfolioSummary;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioSummaryView {
    /// `null` when no profile is active.
    pub personal_info: Option<PersonalInfoView>,
    pub featured_projects: Vec<ProjectView>,
    pub featured_skills: Vec<SkillView>,
    pub recent_experience: Vec<ExperienceView>,
}

impl PortfolioSummaryView {
    pub fn present(summary: PortfolioSummary, urls: &MediaUrlResolver) -> Self {
        Self {
            personal_info: summary
                .personal_info
                .map(|p| PersonalInfoView::present(p, urls)),
            featured_projects: ProjectView::present_all(summary.featured_projects, urls),
            featured_skills: SkillView::present_all(summary.featured_skills, urls),
            recent_experience: ExperienceView::present_all(summary.recent_experience, urls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::MediaConfig;
    use crate::tests::support::fixtures::{image_asset, sample_personal_info};

    fn empty_summary() -> PortfolioSummary {
        PortfolioSummary {
            personal_info: None,
            featured_projects: vec![],
            featured_skills: vec![],
            recent_experience: vec![],
        }
    }

    #[test]
    fn missing_profile_serializes_as_null() {
        let urls = MediaUrlResolver::relative(&MediaConfig::default());

        let view = PortfolioSummaryView::present(empty_summary(), &urls);
        let json = serde_json::to_value(&view).unwrap();

        assert!(json["personal_info"].is_null());
        assert_eq!(json["featured_projects"], serde_json::json!([]));
        assert_eq!(json["recent_experience"], serde_json::json!([]));
    }

    #[test]
    fn nested_views_share_the_resolver() {
        let mut profile = sample_personal_info("Ada");
        profile.profile_image = Some(image_asset("profile/ada.jpg"));
        let summary = PortfolioSummary {
            personal_info: Some(profile),
            ..empty_summary()
        };
        let urls = MediaUrlResolver::relative(&MediaConfig::default());

        let view = PortfolioSummaryView::present(summary, &urls);

        assert_eq!(
            view.personal_info.unwrap().profile_image_url.as_deref(),
            Some("/media/profile/ada.jpg")
        );
    }
}
