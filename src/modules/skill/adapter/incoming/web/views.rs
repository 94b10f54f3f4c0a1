use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::media::application::domain::MediaUrlResolver;
use crate::modules::skill::application::domain::entities::SkillRecord;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillView {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "technical")]
    pub category: String,
    #[schema(example = "Technical")]
    pub category_display: String,
    #[schema(minimum = 1, maximum = 5)]
    pub proficiency_level: i16,
    pub description: String,
    pub icon_url: Option<String>,
    pub order: i32,
    pub is_featured: bool,
}

impl SkillView {
    pub fn present(record: SkillRecord, urls: &MediaUrlResolver) -> Self {
        Self {
            id: record.id,
            icon_url: urls.resolve(record.icon.as_ref()),
            name: record.name,
            category: record.category.code().to_string(),
            category_display: record.category.label().to_string(),
            proficiency_level: record.proficiency_level,
            description: record.description,
            order: record.order,
            is_featured: record.is_featured,
        }
    }

    pub fn present_all(records: Vec<SkillRecord>, urls: &MediaUrlResolver) -> Vec<Self> {
        records
            .into_iter()
            .map(|r| Self::present(r, urls))
            .collect()
    }
}
