use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactMessageRecord;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;

pub struct SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ContactMessageCommand,
    ) -> Result<ContactMessageRecord, SubmitContactMessageError> {
        let record = self
            .repository
            .create(command.to_new_contact_message())
            .await?;

        info!("Stored contact message {}", record.id);

        Ok(record)
    }
}
