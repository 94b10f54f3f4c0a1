use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::media::application::domain::{AssetKind, AssetRef};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub file_path: String,

    #[sea_orm(column_type = "Text")]
    pub original_name: String,

    pub kind: AssetKindDb,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum AssetKindDb {
    #[sea_orm(string_value = "image")]
    Image,

    #[sea_orm(string_value = "file")]
    File,
}

impl From<AssetKindDb> for AssetKind {
    fn from(kind: AssetKindDb) -> Self {
        match kind {
            AssetKindDb::Image => AssetKind::Image,
            AssetKindDb::File => AssetKind::File,
        }
    }
}

impl Model {
    pub fn to_asset_ref(&self) -> AssetRef {
        AssetRef {
            id: self.id,
            file_path: self.file_path.clone(),
            original_name: self.original_name.clone(),
            kind: self.kind.clone().into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
