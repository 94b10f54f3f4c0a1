// src/modules/skill/adapter/outgoing/skill_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::skills::{Column, Entity, SkillCategoryDb};
use super::skill_loader::{into_records, ordered};
use crate::modules::skill::application::domain::entities::SkillRecord;
use crate::modules::skill::application::ports::outgoing::{
    SkillListFilter, SkillQuery, SkillQueryError,
};
use crate::shared::filter::CodeFilter;

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self, filter: SkillListFilter) -> Result<Vec<SkillRecord>, SkillQueryError> {
        let mut query = Entity::find();

        match filter.category {
            CodeFilter::Any => {}
            CodeFilter::Is(category) => {
                query = query.filter(Column::Category.eq(SkillCategoryDb::from(category)));
            }
            CodeFilter::Unknown => return Ok(vec![]),
        }

        if filter.featured_only {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        let models = ordered(query).all(&*self.db).await.map_err(map_db_err)?;

        into_records(&*self.db, models).await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
    use crate::modules::skill::application::domain::entities::SkillCategory;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn skill_model(name: &str, category: SkillCategoryDb, featured: bool) -> skills::Model {
        skills::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            proficiency_level: 5,
            description: "desc".to_string(),
            icon_id: None,
            display_order: 1,
            is_featured: featured,
        }
    }

    fn last_sql(db: DatabaseConnection) -> String {
        let log = db.into_transaction_log();
        // Debug output escapes quotes around identifiers.
        format!("{:?}", log[0]).replace('\\', "")
    }

    #[tokio::test]
    async fn list_maps_rows_in_returned_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill_model("Spanish", SkillCategoryDb::Language, false),
                skill_model("Rust", SkillCategoryDb::Technical, true),
            ]])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));
        let skills = query.list(SkillListFilter::default()).await.unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Spanish");
        assert_eq!(skills[0].category, SkillCategory::Language);
        assert_eq!(skills[1].category, SkillCategory::Technical);
        assert!(skills[1].is_featured);
    }

    #[tokio::test]
    async fn list_applies_category_and_featured_filters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();
        let db = Arc::new(db);

        let query = SkillQueryPostgres::new(db.clone());
        let skills = query
            .list(SkillListFilter {
                category: CodeFilter::Is(SkillCategory::Tool),
                featured_only: true,
            })
            .await
            .unwrap();
        drop(query);

        assert!(skills.is_empty());
        let sql = last_sql(Arc::try_unwrap(db).ok().unwrap());
        assert!(sql.contains(r#""skills"."category" = $1"#));
        assert!(sql.contains(r#""skills"."is_featured" = $2"#));
        assert!(sql.contains(
            r#"ORDER BY "skills"."category" ASC, "skills"."display_order" ASC, "skills"."name" ASC"#
        ));
    }

    #[tokio::test]
    async fn list_with_unknown_category_matches_nothing_without_querying() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let query = SkillQueryPostgres::new(db.clone());
        let skills = query
            .list(SkillListFilter {
                category: CodeFilter::Unknown,
                featured_only: false,
            })
            .await
            .unwrap();
        drop(query);

        assert!(skills.is_empty());
        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn list_without_filters_has_no_where_clause() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<skills::Model>::new()])
                .into_connection(),
        );

        let query = SkillQueryPostgres::new(db.clone());
        query.list(SkillListFilter::default()).await.unwrap();
        drop(query);

        let sql = last_sql(Arc::try_unwrap(db).ok().unwrap());
        assert!(!sql.contains("WHERE"));
    }

    #[tokio::test]
    async fn list_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));
        let result = query.list(SkillListFilter::featured()).await;

        assert!(matches!(result, Err(SkillQueryError::DatabaseError(_))));
    }
}
