use async_trait::async_trait;
use email_address::EmailAddress;
use thiserror::Error;

use crate::modules::contact::application::domain::entities::ContactMessageRecord;
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepositoryError, NewContactMessage,
};
use crate::shared::api::FieldErrors;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const SUBJECT_MAX_CHARS: usize = 200;

const REQUIRED: &str = "This field is required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

//
// ──────────────────────────────────────────────────────────
// Command errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactMessageCommandError {
    #[error("Invalid contact message: {0:?}")]
    Invalid(FieldErrors),
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// A contact message whose fields have been trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageCommand {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactMessageCommand {
    pub fn builder() -> ContactMessageCommandBuilder {
        ContactMessageCommandBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn subject(&self) -> &str {
        &self.subject
    }
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_new_contact_message(&self) -> NewContactMessage {
        NewContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Default)]
pub struct ContactMessageCommandBuilder {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl ContactMessageCommandBuilder {
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn subject(mut self, subject: Option<String>) -> Self {
        self.subject = subject;
        self
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Trims every field and reports all problems at once.
    pub fn build(self) -> Result<ContactMessageCommand, ContactMessageCommandError> {
        let mut errors = FieldErrors::new();

        let name = required(&mut errors, "name", self.name);
        let email = required(&mut errors, "email", self.email);
        let subject = required(&mut errors, "subject", self.subject);
        let message = required(&mut errors, "message", self.message);

        if let Some(name) = &name {
            max_chars(&mut errors, "name", name, NAME_MAX_CHARS);
        }

        if let Some(email) = &email {
            max_chars(&mut errors, "email", email, EMAIL_MAX_CHARS);
            if !EmailAddress::is_valid(email) {
                push(&mut errors, "email", INVALID_EMAIL.to_string());
            }
        }

        if let Some(subject) = &subject {
            max_chars(&mut errors, "subject", subject, SUBJECT_MAX_CHARS);
        }

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
                Ok(ContactMessageCommand {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(ContactMessageCommandError::Invalid(errors)),
        }
    }
}

fn required(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            push(errors, field, REQUIRED.to_string());
            None
        }
    }
}

fn max_chars(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        push(
            errors,
            field,
            format!("Ensure this field has no more than {} characters.", max),
        );
    }
}

fn push(errors: &mut FieldErrors, field: &str, problem: String) {
    errors.entry(field.to_string()).or_default().push(problem);
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactMessageRepositoryError> for SubmitContactMessageError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        match err {
            ContactMessageRepositoryError::DatabaseError(msg) => {
                SubmitContactMessageError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ContactMessageCommand,
    ) -> Result<ContactMessageRecord, SubmitContactMessageError>;
}
