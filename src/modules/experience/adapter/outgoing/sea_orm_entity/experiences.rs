use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::media::adapter::outgoing::sea_orm_entity::assets;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub company: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub position: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub is_current: bool,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub company_url: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub company_logo_id: Option<Uuid>,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "assets::Entity",
        from = "Column::CompanyLogoId",
        to = "assets::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CompanyLogo,

    #[sea_orm(has_many = "super::experience_technologies::Entity")]
    ExperienceTechnologies,
}

impl Related<assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyLogo.def()
    }
}

// Many-to-many: experiences <-> skills via experience_technologies
impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_technologies::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experience_technologies::Relation::Experiences.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
