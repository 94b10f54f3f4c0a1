use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored message from the public contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}
