mod get_experience;

pub use get_experience::{__path_get_experience_handler, get_experience_handler};
