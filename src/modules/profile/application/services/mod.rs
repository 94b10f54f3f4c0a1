mod get_personal_info_service;

pub use get_personal_info_service::GetPersonalInfoService;
