use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::media::application::domain::AssetRef;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Tool,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Language,
        SkillCategory::Tool,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Language => "language",
            SkillCategory::Tool => "tool",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Language => "Languages",
            SkillCategory::Tool => "Tools & Technologies",
        }
    }

    /// Exact, case-sensitive match on the stored code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    /// 1 (beginner) to 5 (expert)
    pub proficiency_level: i16,
    pub description: String,
    pub icon: Option<AssetRef>,
    pub order: i32,
    pub is_featured: bool,
}
