use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::media::application::domain::AssetRef;
use crate::modules::skill::application::domain::entities::SkillRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Planned => "planned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Gallery image; `image` is `None` only if the asset row vanished.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectImageRecord {
    pub id: Uuid,
    pub image: Option<AssetRef>,
    pub caption: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub project_url: String,
    pub github_url: String,
    pub demo_url: String,
    pub featured_image: Option<AssetRef>,
    pub technologies: Vec<SkillRecord>,
    pub images: Vec<ProjectImageRecord>,
    pub is_featured: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
