use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::media::adapter::incoming::web::url_resolver_for;
use crate::modules::summary::adapter::incoming::web::views::PortfolioSummaryView;
use crate::modules::summary::application::ports::incoming::use_cases::GetPortfolioSummaryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Portfolio summary
///
/// Active profile, top three featured projects, featured skills and the
/// three most recent experience entries.
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "summary",
    responses(
        (status = 200, description = "Summary", body = inline(crate::api::schemas::SuccessResponse<PortfolioSummaryView>)),
        (
            status = 500,
            description = "Unexpected failure",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[get("/api/summary")]
pub async fn get_portfolio_summary_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio_summary.execute().await {
        Ok(summary) => {
            let urls = url_resolver_for(&req, &data.media);
            ApiResponse::success(PortfolioSummaryView::present(summary, &urls))
        }

        Err(GetPortfolioSummaryError::QueryFailed(msg)) => {
            error!("Failed to build portfolio summary: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
