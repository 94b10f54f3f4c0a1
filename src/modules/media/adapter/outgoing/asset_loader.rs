use std::collections::{BTreeSet, HashMap};

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::sea_orm_entity::assets::{Column, Entity};
use crate::modules::media::application::domain::AssetRef;

/// Loads every referenced asset in one `IN (...)` query.
/// An empty id set issues no query.
pub async fn load_assets<C, I>(db: &C, ids: I) -> Result<HashMap<Uuid, AssetRef>, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Uuid>,
{
    let ids: BTreeSet<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = Entity::find()
        .filter(Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(models
        .into_iter()
        .map(|m| (m.id, m.to_asset_ref()))
        .collect())
}
