mod get_skills;

pub use get_skills::{__path_get_skills_handler, get_skills_handler, SkillListQuery};
