use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::media::adapter::incoming::web::url_resolver_for;
use crate::modules::profile::adapter::incoming::web::views::PersonalInfoView;
use crate::modules::profile::application::ports::incoming::use_cases::GetPersonalInfoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get personal information
///
/// Lists the active profile records (at most one in practice).
#[utoipa::path(
    get,
    path = "/api/personal-info",
    tag = "profile",
    responses(
        (status = 200, description = "Active profile records", body = inline(crate::api::schemas::SuccessResponse<Vec<PersonalInfoView>>)),
        (status = 500, description = "Unexpected failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/personal-info")]
pub async fn get_personal_info_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.personal_info.execute().await {
        Ok(records) => {
            let urls = url_resolver_for(&req, &data.media);
            let views: Vec<PersonalInfoView> = records
                .into_iter()
                .map(|r| PersonalInfoView::present(r, &urls))
                .collect();
            ApiResponse::success(views)
        }

        Err(GetPersonalInfoError::QueryFailed(msg)) => {
            error!("Failed to load personal info: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
