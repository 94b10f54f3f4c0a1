use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessageRecord;

/// Echo of a stored contact message. The read flag stays internal.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactMessageView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessageView {
    pub fn present(record: ContactMessageRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            subject: record.subject,
            message: record.message,
            created_at: record.created_at,
        }
    }
}
