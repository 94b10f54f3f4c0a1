mod asset_loader;
pub mod sea_orm_entity;

pub use asset_loader::load_assets;
