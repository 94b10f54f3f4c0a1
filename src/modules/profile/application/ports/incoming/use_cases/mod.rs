mod get_personal_info;

pub use get_personal_info::{GetPersonalInfoError, GetPersonalInfoUseCase};
