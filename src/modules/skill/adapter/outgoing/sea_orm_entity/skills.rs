use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::media::adapter::outgoing::sea_orm_entity::assets;
use crate::modules::skill::application::domain::entities::SkillCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    pub category: SkillCategoryDb,

    /// CHECK (proficiency_level BETWEEN 1 AND 5)
    pub proficiency_level: i16,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub icon_id: Option<Uuid>,

    pub display_order: i32,

    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum SkillCategoryDb {
    #[sea_orm(string_value = "technical")]
    Technical,

    #[sea_orm(string_value = "soft")]
    Soft,

    #[sea_orm(string_value = "language")]
    Language,

    #[sea_orm(string_value = "tool")]
    Tool,
}

impl From<SkillCategoryDb> for SkillCategory {
    fn from(category: SkillCategoryDb) -> Self {
        match category {
            SkillCategoryDb::Technical => SkillCategory::Technical,
            SkillCategoryDb::Soft => SkillCategory::Soft,
            SkillCategoryDb::Language => SkillCategory::Language,
            SkillCategoryDb::Tool => SkillCategory::Tool,
        }
    }
}

impl From<SkillCategory> for SkillCategoryDb {
    fn from(category: SkillCategory) -> Self {
        match category {
            SkillCategory::Technical => SkillCategoryDb::Technical,
            SkillCategory::Soft => SkillCategoryDb::Soft,
            SkillCategory::Language => SkillCategoryDb::Language,
            SkillCategory::Tool => SkillCategoryDb::Tool,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "assets::Entity",
        from = "Column::IconId",
        to = "assets::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Icon,
}

impl Related<assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Icon.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
