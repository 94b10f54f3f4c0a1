use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::media::application::domain::AssetRef;

/// The site owner's profile. Optional text fields are stored as empty
/// strings rather than NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfoRecord {
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
    pub profile_image: Option<AssetRef>,
    pub resume: Option<AssetRef>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
