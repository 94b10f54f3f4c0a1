use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::media::application::domain::{AssetKind, AssetRef};
use crate::modules::profile::application::domain::entities::PersonalInfoRecord;
use crate::modules::project::application::domain::entities::{ProjectRecord, ProjectStatus};
use crate::modules::skill::application::domain::entities::{SkillCategory, SkillRecord};

fn asset(path: &str, kind: AssetKind) -> AssetRef {
    AssetRef {
        id: Uuid::new_v4(),
        file_path: path.to_string(),
        original_name: path.rsplit('/').next().unwrap_or(path).to_string(),
        kind,
    }
}

pub fn image_asset(path: &str) -> AssetRef {
    asset(path, AssetKind::Image)
}

pub fn file_asset(path: &str) -> AssetRef {
    asset(path, AssetKind::File)
}

pub fn sample_skill(name: &str, category: SkillCategory) -> SkillRecord {
    SkillRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        proficiency_level: 4,
        description: String::new(),
        icon: None,
        order: 0,
        is_featured: false,
    }
}

pub fn sample_personal_info(name: &str) -> PersonalInfoRecord {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    PersonalInfoRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: "Software Engineer".to_string(),
        bio: "Builds things.".to_string(),
        email: "owner@example.com".to_string(),
        phone: String::new(),
        location: "Remote".to_string(),
        linkedin_url: String::new(),
        github_url: "https://github.com/example".to_string(),
        website_url: String::new(),
        profile_image: None,
        resume: None,
        is_active: true,
        created_at: created,
        updated_at: created,
    }
}

/// Ongoing position starting on `start` (`YYYY-MM-DD`).
pub fn sample_experience(company: &str, start: &str) -> ExperienceRecord {
    ExperienceRecord {
        id: Uuid::new_v4(),
        company: company.to_string(),
        position: "Engineer".to_string(),
        description: "Shipped features.".to_string(),
        start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
        end_date: None,
        is_current: true,
        location: String::new(),
        company_url: String::new(),
        company_logo: None,
        technologies: vec![],
        order: 0,
    }
}

pub fn sample_project(title: &str) -> ProjectRecord {
    let created = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();

    ProjectRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "Short description".to_string(),
        detailed_description: String::new(),
        status: ProjectStatus::Completed,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        end_date: None,
        project_url: String::new(),
        github_url: String::new(),
        demo_url: String::new(),
        featured_image: None,
        technologies: vec![],
        images: vec![],
        is_featured: false,
        order: 0,
        created_at: created,
        updated_at: created,
    }
}
