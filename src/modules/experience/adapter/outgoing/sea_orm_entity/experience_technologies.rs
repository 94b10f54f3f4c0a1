use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

/// experience <-> skill link; (experience_id, skill_id) is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_technologies")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "experience_id", column_type = "Uuid")]
    pub experience_id: Uuid,

    #[sea_orm(column_name = "skill_id", column_type = "Uuid")]
    pub skill_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experiences::Entity",
        from = "Column::ExperienceId",
        to = "super::experiences::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Experiences,

    #[sea_orm(
        belongs_to = "skills::Entity",
        from = "Column::SkillId",
        to = "skills::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Skills,
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
