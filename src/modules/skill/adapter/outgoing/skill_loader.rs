use std::collections::{BTreeSet, HashMap, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use super::sea_orm_entity::skills::{self, Column, Entity};
use crate::modules::media::adapter::outgoing::load_assets;
use crate::modules::skill::application::domain::entities::SkillRecord;

/// Canonical skill ordering: category, then display order, then name.
pub(crate) fn ordered(select: Select<Entity>) -> Select<Entity> {
    select
        .order_by_asc(Column::Category)
        .order_by_asc(Column::DisplayOrder)
        .order_by_asc(Column::Name)
}

/// Resolves icons for a page of skill rows with a single asset query.
pub(crate) async fn into_records<C>(
    db: &C,
    models: Vec<skills::Model>,
) -> Result<Vec<SkillRecord>, DbErr>
where
    C: ConnectionTrait,
{
    let icons = load_assets(db, models.iter().filter_map(|m| m.icon_id)).await?;

    Ok(models
        .into_iter()
        .map(|m| SkillRecord {
            id: m.id,
            name: m.name,
            category: m.category.into(),
            proficiency_level: m.proficiency_level,
            description: m.description,
            icon: m.icon_id.and_then(|id| icons.get(&id).cloned()),
            order: m.display_order,
            is_featured: m.is_featured,
        })
        .collect())
}

/// Loads the skills referenced by a batch of parent rows, in canonical order.
/// An empty id set issues no query.
pub async fn load_skills_by_ids<C, I>(db: &C, ids: I) -> Result<Vec<SkillRecord>, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Uuid>,
{
    let ids: BTreeSet<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let models = ordered(Entity::find().filter(Column::Id.is_in(ids)))
        .all(db)
        .await?;

    into_records(db, models).await
}

/// Groups loaded skills under the owner rows that link to them.
/// Each owner's list keeps the canonical order of `skills`.
pub fn technologies_by_owner(
    links: &[(Uuid, Uuid)],
    skills: &[SkillRecord],
) -> HashMap<Uuid, Vec<SkillRecord>> {
    let linked: HashSet<(Uuid, Uuid)> = links.iter().copied().collect();
    let owners: BTreeSet<Uuid> = links.iter().map(|(owner, _)| *owner).collect();

    owners
        .into_iter()
        .map(|owner| {
            let owned = skills
                .iter()
                .filter(|s| linked.contains(&(owner, s.id)))
                .cloned()
                .collect();
            (owner, owned)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::adapter::outgoing::sea_orm_entity::assets::{self, AssetKindDb};
    use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::SkillCategoryDb;
    use crate::modules::skill::application::domain::entities::SkillCategory;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn skill_model(id: Uuid, name: &str, icon_id: Option<Uuid>) -> skills::Model {
        skills::Model {
            id,
            name: name.to_string(),
            category: SkillCategoryDb::Technical,
            proficiency_level: 3,
            description: String::new(),
            icon_id,
            display_order: 0,
            is_featured: false,
        }
    }

    #[test]
    fn technologies_are_grouped_per_owner_in_skill_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let (go, rust, sql) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let skills: Vec<SkillRecord> = [(go, "Go"), (rust, "Rust"), (sql, "SQL")]
            .into_iter()
            .map(|(id, name)| SkillRecord {
                id,
                name: name.to_string(),
                category: SkillCategory::Technical,
                proficiency_level: 3,
                description: String::new(),
                icon: None,
                order: 0,
                is_featured: false,
            })
            .collect();

        let grouped = technologies_by_owner(&[(a, sql), (a, go), (b, rust)], &skills);

        let names = |owner: Uuid| -> Vec<String> {
            grouped[&owner].iter().map(|s| s.name.clone()).collect()
        };
        assert_eq!(names(a), vec!["Go", "SQL"]);
        assert_eq!(names(b), vec!["Rust"]);
    }

    #[tokio::test]
    async fn empty_ids_issue_no_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let skills = load_skills_by_ids(&db, Vec::<Uuid>::new()).await.unwrap();

        assert!(skills.is_empty());
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn skills_without_icons_take_one_query() {
        let rust = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![skill_model(rust, "Rust", None)]])
            .into_connection();

        let skills = load_skills_by_ids(&db, vec![rust]).await.unwrap();

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].category, SkillCategory::Technical);
        assert!(skills[0].icon.is_none());
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn icons_are_resolved_in_a_second_query() {
        let rust = Uuid::new_v4();
        let sql = Uuid::new_v4();
        let icon = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill_model(rust, "Rust", Some(icon)),
                skill_model(sql, "SQL", Some(icon)),
            ]])
            .append_query_results(vec![vec![assets::Model {
                id: icon,
                file_path: "skills/icons/rust.svg".to_string(),
                original_name: "rust.svg".to_string(),
                kind: AssetKindDb::Image,
                created_at: Utc::now().fixed_offset(),
            }]])
            .into_connection();

        let skills = load_skills_by_ids(&db, vec![rust, sql]).await.unwrap();

        assert_eq!(skills.len(), 2);
        for skill in &skills {
            assert_eq!(
                skill.icon.as_ref().map(|a| a.file_path.as_str()),
                Some("skills/icons/rust.svg")
            );
        }
        assert_eq!(db.into_transaction_log().len(), 2);
    }
}
