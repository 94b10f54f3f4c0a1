use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::contact::adapter::incoming::web::views::ContactMessageView;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessageCommand, ContactMessageCommandError, SubmitContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field is required; absent and `null` are reported as validation errors.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactMessageRequest {
    #[schema(example = "Ada Lovelace", max_length = 100)]
    pub name: Option<String>,
    #[schema(example = "ada@example.com", max_length = 254)]
    pub email: Option<String>,
    #[schema(example = "Collaboration", max_length = 200)]
    pub subject: Option<String>,
    #[schema(example = "I enjoyed your latest project.")]
    pub message: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Send a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(crate::api::schemas::SuccessResponse<ContactMessageView>)),
        (
            status = 400,
            description = "Invalid input",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid input",
                    "fields": { "email": ["Enter a valid email address."] }
                }
            })
        ),
        (status = 500, description = "Unexpected failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_message_handler(
    req: web::Json<ContactMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match ContactMessageCommand::builder()
        .name(req.name)
        .email(req.email)
        .subject(req.subject)
        .message(req.message)
        .build()
    {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.submit_contact_message.execute(command).await {
        Ok(record) => ApiResponse::created(ContactMessageView::present(record)),

        Err(SubmitContactMessageError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(e: ContactMessageCommandError) -> actix_web::HttpResponse {
    match e {
        ContactMessageCommandError::Invalid(fields) => {
            ApiResponse::validation_error("Invalid input", fields)
        }
    }
}
