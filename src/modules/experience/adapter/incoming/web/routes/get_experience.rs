use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::experience::adapter::incoming::web::views::ExperienceView;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceError;
use crate::modules::media::adapter::incoming::web::url_resolver_for;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List work experience
///
/// Newest first, each entry with its technologies.
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "Experience list", body = inline(crate::api::schemas::SuccessResponse<Vec<ExperienceView>>)),
        (status = 500, description = "Unexpected failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    match data.experience.execute().await {
        Ok(records) => {
            let urls = url_resolver_for(&req, &data.media);
            ApiResponse::success(ExperienceView::present_all(records, &urls))
        }

        Err(GetExperienceError::QueryFailed(msg)) => {
            error!("Failed to list experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
