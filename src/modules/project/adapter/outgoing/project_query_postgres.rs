// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::media::adapter::outgoing::load_assets;
use crate::modules::media::application::domain::AssetRef;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, Column, Entity, ProjectStatusDb,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_images, project_technologies,
};
use crate::modules::project::application::domain::entities::{
    ProjectImageRecord, ProjectRecord,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::modules::skill::adapter::outgoing::{load_skills_by_ids, technologies_by_owner};
use crate::modules::skill::application::domain::entities::SkillRecord;
use crate::shared::filter::CodeFilter;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attaches technologies, gallery images and assets to a page of
    /// projects using one batched query per relation.
    async fn hydrate(&self, models: Vec<projects::Model>) -> Result<Vec<ProjectRecord>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let links: Vec<(Uuid, Uuid)> = project_technologies::Entity::find()
            .filter(project_technologies::Column::ProjectId.is_in(ids.iter().copied()))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|l| (l.project_id, l.skill_id))
            .collect();
        let skills = load_skills_by_ids(&*self.db, links.iter().map(|(_, s)| *s)).await?;
        let mut technologies = technologies_by_owner(&links, &skills);

        let images = project_images::Entity::find()
            .filter(project_images::Column::ProjectId.is_in(ids.iter().copied()))
            .order_by_asc(project_images::Column::DisplayOrder)
            .all(&*self.db)
            .await?;

        let asset_ids = models
            .iter()
            .filter_map(|m| m.featured_image_id)
            .chain(images.iter().map(|i| i.image_id));
        let assets = load_assets(&*self.db, asset_ids).await?;

        let mut gallery = group_images(images, &assets);

        Ok(models
            .into_iter()
            .map(|m| {
                let technologies = technologies.remove(&m.id).unwrap_or_default();
                let images = gallery.remove(&m.id).unwrap_or_default();
                let featured_image = m.featured_image_id.and_then(|id| assets.get(&id).cloned());
                model_to_record(m, featured_image, technologies, images)
            })
            .collect())
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let mut query = Entity::find();

        match filter.status {
            CodeFilter::Any => {}
            CodeFilter::Is(status) => {
                query = query.filter(Column::Status.eq(ProjectStatusDb::from(status)));
            }
            CodeFilter::Unknown => return Ok(vec![]),
        }

        if filter.featured_only {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        let models = query
            .order_by_desc(Column::IsFeatured)
            .order_by_asc(Column::DisplayOrder)
            .order_by_desc(Column::StartDate)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(models).await.map_err(map_db_err)
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<ProjectRecord, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        self.hydrate(vec![project])
            .await
            .map_err(map_db_err)?
            .pop()
            .ok_or(ProjectQueryError::NotFound)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn group_images(
    images: Vec<project_images::Model>,
    assets: &HashMap<Uuid, AssetRef>,
) -> HashMap<Uuid, Vec<ProjectImageRecord>> {
    let mut grouped: HashMap<Uuid, Vec<ProjectImageRecord>> = HashMap::new();
    for image in images {
        grouped
            .entry(image.project_id)
            .or_default()
            .push(ProjectImageRecord {
                id: image.id,
                image: assets.get(&image.image_id).cloned(),
                caption: image.caption,
                order: image.display_order,
            });
    }
    grouped
}

fn model_to_record(
    model: projects::Model,
    featured_image: Option<AssetRef>,
    technologies: Vec<SkillRecord>,
    images: Vec<ProjectImageRecord>,
) -> ProjectRecord {
    ProjectRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        detailed_description: model.detailed_description,
        status: model.status.into(),
        start_date: model.start_date,
        end_date: model.end_date,
        project_url: model.project_url,
        github_url: model.github_url,
        demo_url: model.demo_url,
        featured_image,
        technologies,
        images,
        is_featured: model.is_featured,
        order: model.display_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
