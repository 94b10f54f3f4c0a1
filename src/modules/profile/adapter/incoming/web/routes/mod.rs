mod get_personal_info;

pub use get_personal_info::{__path_get_personal_info_handler, get_personal_info_handler};
