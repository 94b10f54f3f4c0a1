mod skill_loader;
mod skill_query_postgres;
pub mod sea_orm_entity;

pub use skill_loader::{load_skills_by_ids, technologies_by_owner};
pub use skill_query_postgres::SkillQueryPostgres;
