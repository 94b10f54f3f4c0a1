use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::media::application::domain::AssetRef;
use crate::modules::skill::application::domain::entities::SkillRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// `None` for an ongoing position.
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub location: String,
    pub company_url: String,
    pub company_logo: Option<AssetRef>,
    pub technologies: Vec<SkillRecord>,
    pub order: i32,
}
