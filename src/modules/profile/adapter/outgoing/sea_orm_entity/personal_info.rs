use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::media::adapter::outgoing::sea_orm_entity::assets;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "personal_info")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub linkedin_url: String,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,

    #[sea_orm(column_type = "Text")]
    pub website_url: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub profile_image_id: Option<Uuid>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub resume_id: Option<Uuid>,

    // At most one active row (partial unique index).
    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "assets::Entity",
        from = "Column::ProfileImageId",
        to = "assets::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ProfileImage,

    #[sea_orm(
        belongs_to = "assets::Entity",
        from = "Column::ResumeId",
        to = "assets::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Resume,
}

impl ActiveModelBehavior for ActiveModel {}
