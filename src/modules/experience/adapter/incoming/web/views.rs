use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::media::application::domain::MediaUrlResolver;
use crate::modules::skill::adapter::incoming::web::views::SkillView;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceView {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub location: String,
    pub company_url: String,
    pub company_logo_url: Option<String>,
    pub technologies: Vec<SkillView>,
    pub order: i32,
}

impl ExperienceView {
    pub fn present(record: ExperienceRecord, urls: &MediaUrlResolver) -> Self {
        Self {
            id: record.id,
            company_logo_url: urls.resolve(record.company_logo.as_ref()),
            technologies: SkillView::present_all(record.technologies, urls),
            company: record.company,
            position: record.position,
            description: record.description,
            start_date: record.start_date,
            end_date: record.end_date,
            is_current: record.is_current,
            location: record.location,
            company_url: record.company_url,
            order: record.order,
        }
    }

    pub fn present_all(records: Vec<ExperienceRecord>, urls: &MediaUrlResolver) -> Vec<Self> {
        records
            .into_iter()
            .map(|r| Self::present(r, urls))
            .collect()
    }
}
