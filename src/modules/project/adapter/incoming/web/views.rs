use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::media::application::domain::MediaUrlResolver;
use crate::modules::project::application::domain::entities::{ProjectImageRecord, ProjectRecord};
use crate::modules::skill::adapter::incoming::web::views::SkillView;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectImageView {
    pub id: Uuid,
    pub image_url: Option<String>,
    pub caption: String,
    pub order: i32,
}

impl ProjectImageView {
    pub fn present(record: ProjectImageRecord, urls: &MediaUrlResolver) -> Self {
        Self {
            id: record.id,
            image_url: urls.resolve(record.image.as_ref()),
            caption: record.caption,
            order: record.order,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    #[schema(example = "in_progress")]
    pub status: String,
    #[schema(example = "In Progress")]
    pub status_display: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub project_url: String,
    pub github_url: String,
    pub demo_url: String,
    pub featured_image_url: Option<String>,
    pub technologies: Vec<SkillView>,
    pub images: Vec<ProjectImageView>,
    pub is_featured: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectView {
    pub fn present(record: ProjectRecord, urls: &MediaUrlResolver) -> Self {
        Self {
            id: record.id,
            status: record.status.code().to_string(),
            status_display: record.status.label().to_string(),
            featured_image_url: urls.resolve(record.featured_image.as_ref()),
            technologies: SkillView::present_all(record.technologies, urls),
            images: record
                .images
                .into_iter()
                .map(|i| ProjectImageView::present(i, urls))
                .collect(),
            title: record.title,
            description: record.description,
            detailed_description: record.detailed_description,
            start_date: record.start_date,
            end_date: record.end_date,
            project_url: record.project_url,
            github_url: record.github_url,
            demo_url: record.demo_url,
            is_featured: record.is_featured,
            order: record.order,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    pub fn present_all(records: Vec<ProjectRecord>, urls: &MediaUrlResolver) -> Vec<Self> {
        records
            .into_iter()
            .map(|r| Self::present(r, urls))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::MediaConfig;
    use crate::modules::project::application::domain::entities::ProjectStatus;
    use crate::tests::support::fixtures::{image_asset, sample_project};

    #[test]
    fn present_emits_status_code_and_label() {
        let mut record = sample_project("Planner");
        record.status = ProjectStatus::Planned;
        let urls = MediaUrlResolver::relative(&MediaConfig::default());

        let view = ProjectView::present(record, &urls);

        assert_eq!(view.status, "planned");
        assert_eq!(view.status_display, "Planned");
    }

    #[test]
    fn gallery_keeps_order_and_tolerates_missing_asset() {
        let mut record = sample_project("Gallery");
        record.images = vec![
            ProjectImageRecord {
                id: Uuid::new_v4(),
                image: Some(image_asset("projects/one.png")),
                caption: "one".to_string(),
                order: 0,
            },
            ProjectImageRecord {
                id: Uuid::new_v4(),
                image: None,
                caption: "two".to_string(),
                order: 1,
            },
        ];
        let urls = MediaUrlResolver::relative(&MediaConfig::new("/uploads"));

        let view = ProjectView::present(record, &urls);

        assert_eq!(
            view.images[0].image_url.as_deref(),
            Some("/uploads/projects/one.png")
        );
        assert_eq!(view.images[1].image_url, None);
        assert_eq!(view.images[1].caption, "two");
    }
}
