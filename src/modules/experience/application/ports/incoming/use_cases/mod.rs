mod get_experience;

pub use get_experience::{GetExperienceError, GetExperienceUseCase};
