use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::media::adapter::outgoing::sea_orm_entity::assets;
use crate::modules::project::application::domain::entities::ProjectStatus;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub detailed_description: String,

    pub status: ProjectStatusDb,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Text")]
    pub project_url: String,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,

    #[sea_orm(column_type = "Text")]
    pub demo_url: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub featured_image_id: Option<Uuid>,

    pub is_featured: bool,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ProjectStatusDb {
    #[sea_orm(string_value = "completed")]
    Completed,

    #[sea_orm(string_value = "in_progress")]
    InProgress,

    #[sea_orm(string_value = "planned")]
    Planned,
}

impl From<ProjectStatusDb> for ProjectStatus {
    fn from(status: ProjectStatusDb) -> Self {
        match status {
            ProjectStatusDb::Completed => ProjectStatus::Completed,
            ProjectStatusDb::InProgress => ProjectStatus::InProgress,
            ProjectStatusDb::Planned => ProjectStatus::Planned,
        }
    }
}

impl From<ProjectStatus> for ProjectStatusDb {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Completed => ProjectStatusDb::Completed,
            ProjectStatus::InProgress => ProjectStatusDb::InProgress,
            ProjectStatus::Planned => ProjectStatusDb::Planned,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "assets::Entity",
        from = "Column::FeaturedImageId",
        to = "assets::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    FeaturedImage,

    #[sea_orm(has_many = "super::project_images::Entity")]
    ProjectImages,

    #[sea_orm(has_many = "super::project_technologies::Entity")]
    ProjectTechnologies,
}

impl Related<assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeaturedImage.def()
    }
}

impl Related<super::project_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImages.def()
    }
}

// Many-to-many: projects <-> skills via project_technologies
impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_technologies::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_technologies::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
