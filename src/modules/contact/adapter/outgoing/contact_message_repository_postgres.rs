use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::contact_messages::{
    ActiveModel as ContactMessageActiveModel, Model as ContactMessageModel,
};
use crate::modules::contact::application::domain::entities::ContactMessageRecord;
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError, NewContactMessage,
};

#[derive(Debug, Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn create(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError> {
        let active = ContactMessageActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            created_at: Set(Utc::now().fixed_offset()),
            is_read: Set(false),
        };

        let inserted: ContactMessageModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into())
    }
}

impl From<ContactMessageModel> for ContactMessageRecord {
    fn from(model: ContactMessageModel) -> Self {
        ContactMessageRecord {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at.into(),
            is_read: model.is_read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn new_message() -> NewContactMessage {
        NewContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice work".to_string(),
        }
    }

    fn stored_model(id: Uuid) -> ContactMessageModel {
        ContactMessageModel {
            id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice work".to_string(),
            created_at: Utc::now().fixed_offset(),
            is_read: false,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![stored_model(id)]])
                .into_connection(),
        );

        let repo = ContactMessageRepositoryPostgres::new(db.clone());

        let record = repo.create(new_message()).await.unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.email, "ada@example.com");
        assert!(!record.is_read);

        drop(repo);
        let db = Arc::try_unwrap(db).ok().unwrap();
        let log = db.into_transaction_log();
        let sql = format!("{:?}", log[0]).replace('\\', "");
        assert!(sql.contains(r#"INSERT INTO "contact_messages""#));
        assert!(sql.contains("RETURNING"));
    }

    #[tokio::test]
    async fn test_create_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));

        let result = repo.create(new_message()).await;

        assert!(matches!(
            result,
            Err(ContactMessageRepositoryError::DatabaseError(_))
        ));
    }
}
