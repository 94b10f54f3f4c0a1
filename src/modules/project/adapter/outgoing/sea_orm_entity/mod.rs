pub mod project_images;
pub mod project_technologies;
pub mod projects;
