use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::media::application::domain::MediaUrlResolver;
use crate::modules::profile::application::domain::entities::PersonalInfoRecord;

/// Public profile. `is_active` is internal and never exposed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonalInfoView {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub website_url: String,
    pub profile_image_url: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonalInfoView {
    pub fn present(record: PersonalInfoRecord, urls: &MediaUrlResolver) -> Self {
        Self {
            id: record.id,
            profile_image_url: urls.resolve(record.profile_image.as_ref()),
            resume_url: urls.resolve(record.resume.as_ref()),
            name: record.name,
            title: record.title,
            bio: record.bio,
            email: record.email,
            phone: record.phone,
            location: record.location,
            linkedin_url: record.linkedin_url,
            github_url: record.github_url,
            website_url: record.website_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::MediaConfig;
    use crate::tests::support::fixtures::{file_asset, sample_personal_info};

    #[test]
    fn present_resolves_assets_and_hides_active_flag() {
        let mut record = sample_personal_info("Ada Lovelace");
        record.resume = Some(file_asset("https://cdn.example.com/ada.pdf"));
        let urls = MediaUrlResolver::relative(&MediaConfig::default());

        let view = PersonalInfoView::present(record, &urls);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["name"], "Ada Lovelace");
        assert!(json["profile_image_url"].is_null());
        assert_eq!(json["resume_url"], "https://cdn.example.com/ada.pdf");
        assert!(json.get("is_active").is_none());
    }
}
