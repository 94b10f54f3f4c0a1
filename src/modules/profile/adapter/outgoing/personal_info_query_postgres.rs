// src/modules/profile/adapter/outgoing/personal_info_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::sea_orm_entity::personal_info::{self, Column, Entity};
use crate::modules::media::adapter::outgoing::load_assets;
use crate::modules::media::application::domain::AssetRef;
use crate::modules::profile::application::domain::entities::PersonalInfoRecord;
use crate::modules::profile::application::ports::outgoing::{
    PersonalInfoQuery, PersonalInfoQueryError,
};

#[derive(Clone)]
pub struct PersonalInfoQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PersonalInfoQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_active(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<PersonalInfoRecord>, PersonalInfoQueryError> {
        let models = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let asset_ids = models
            .iter()
            .flat_map(|m| [m.profile_image_id, m.resume_id])
            .flatten()
            .collect::<Vec<_>>();
        let assets = load_assets(&*self.db, asset_ids)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| {
                let profile_image = m.profile_image_id.and_then(|id| assets.get(&id).cloned());
                let resume = m.resume_id.and_then(|id| assets.get(&id).cloned());
                model_to_record(m, profile_image, resume)
            })
            .collect())
    }
}

#[async_trait]
impl PersonalInfoQuery for PersonalInfoQueryPostgres {
    async fn list_active(&self) -> Result<Vec<PersonalInfoRecord>, PersonalInfoQueryError> {
        self.fetch_active(None).await
    }

    async fn first_active(&self) -> Result<Option<PersonalInfoRecord>, PersonalInfoQueryError> {
        Ok(self.fetch_active(Some(1)).await?.into_iter().next())
    }
}

fn model_to_record(
    model: personal_info::Model,
    profile_image: Option<AssetRef>,
    resume: Option<AssetRef>,
) -> PersonalInfoRecord {
    PersonalInfoRecord {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        linkedin_url: model.linkedin_url,
        github_url: model.github_url,
        website_url: model.website_url,
        profile_image,
        resume,
        is_active: model.is_active,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> PersonalInfoQueryError {
    PersonalInfoQueryError::DatabaseError(e.to_string())
}
