mod entities;
mod media_url;

pub use entities::{AssetKind, AssetRef};
pub use media_url::{MediaConfig, MediaUrlResolver};
