use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::media::adapter::outgoing::sea_orm_entity::assets;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_images")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "project_id", column_type = "Uuid")]
    pub project_id: Uuid,

    #[sea_orm(column_name = "image_id", column_type = "Uuid")]
    pub image_id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub caption: String,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Projects,

    // Deleting the stored image removes the gallery entry too.
    #[sea_orm(
        belongs_to = "assets::Entity",
        from = "Column::ImageId",
        to = "assets::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Image,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
