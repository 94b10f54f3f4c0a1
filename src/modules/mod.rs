pub mod contact;
pub mod experience;
pub mod media;
pub mod profile;
pub mod project;
pub mod skill;
pub mod summary;
