use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::media::adapter::incoming::web::url_resolver_for;
use crate::modules::project::adapter::incoming::web::views::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project
///
/// An id that is not a UUID is treated as unknown.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project UUID")),
    responses(
        (status = 200, description = "Project detail", body = inline(crate::api::schemas::SuccessResponse<ProjectView>)),
        (
            status = 404,
            description = "Unknown project",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "Project not found"
                }
            })
        ),
        (status = 500, description = "Unexpected failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(project_id) = Uuid::parse_str(&path.into_inner()) else {
        return project_not_found();
    };

    match data.project.get_single.execute(project_id).await {
        Ok(record) => {
            let urls = url_resolver_for(&req, &data.media);
            ApiResponse::success(ProjectView::present(record, &urls))
        }

        Err(GetSingleProjectError::NotFound) => project_not_found(),

        Err(GetSingleProjectError::QueryFailed(msg)) => {
            error!("Failed to load project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}

fn project_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
}
