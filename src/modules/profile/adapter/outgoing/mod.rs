mod personal_info_query_postgres;
pub mod sea_orm_entity;

pub use personal_info_query_postgres::PersonalInfoQueryPostgres;
