pub mod project_query;
