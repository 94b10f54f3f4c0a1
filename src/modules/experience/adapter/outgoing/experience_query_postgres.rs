// src/modules/experience/adapter/outgoing/experience_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::experience_technologies;
use super::sea_orm_entity::experiences::{Column, Entity};
use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};
use crate::modules::media::adapter::outgoing::load_assets;
use crate::modules::skill::adapter::outgoing::{load_skills_by_ids, technologies_by_owner};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_links(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, Uuid)>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = experience_technologies::Entity::find()
            .filter(experience_technologies::Column::ExperienceId.is_in(ids.iter().copied()))
            .all(&*self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.experience_id, r.skill_id))
            .collect())
    }

    async fn fetch(&self, limit: Option<u64>) -> Result<Vec<ExperienceRecord>, DbErr> {
        let models = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::DisplayOrder)
            .limit(limit)
            .all(&*self.db)
            .await?;

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links = self.load_links(&ids).await?;
        let skills = load_skills_by_ids(&*self.db, links.iter().map(|(_, skill)| *skill)).await?;
        let mut technologies = technologies_by_owner(&links, &skills);
        let logos = load_assets(&*self.db, models.iter().filter_map(|m| m.company_logo_id)).await?;

        Ok(models
            .into_iter()
            .map(|m| ExperienceRecord {
                id: m.id,
                technologies: technologies.remove(&m.id).unwrap_or_default(),
                company_logo: m.company_logo_id.and_then(|id| logos.get(&id).cloned()),
                company: m.company,
                position: m.position,
                description: m.description,
                start_date: m.start_date,
                end_date: m.end_date,
                is_current: m.is_current,
                location: m.location,
                company_url: m.company_url,
                order: m.display_order,
            })
            .collect())
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self, limit: Option<u64>) -> Result<Vec<ExperienceRecord>, ExperienceQueryError> {
        self.fetch(limit).await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
