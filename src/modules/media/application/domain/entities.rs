use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    File,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetKind::Image => "image",
            AssetKind::File => "file",
        };
        write!(f, "{s}")
    }
}

/// A stored file or image, referenced by records but owned by the storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub id: Uuid,
    /// Storage-relative path, or an absolute URL when the backend hands those out.
    pub file_path: String,
    pub original_name: String,
    pub kind: AssetKind,
}
