use actix_web::{get, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::media::adapter::incoming::web::url_resolver_for;
use crate::modules::project::adapter::incoming::web::views::ProjectView;
use crate::modules::project::application::domain::entities::ProjectStatus;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::filter::CodeFilter;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// One of `completed`, `in_progress`, `planned`. Any other non-empty value matches nothing.
    pub status: Option<String>,
    /// Any non-empty value restricts the list to featured projects.
    pub featured: Option<String>,
}

impl From<GetProjectsQuery> for ProjectListFilter {
    fn from(q: GetProjectsQuery) -> Self {
        ProjectListFilter {
            status: CodeFilter::from_param(q.status.as_deref(), ProjectStatus::from_code),
            featured_only: q.featured.is_some_and(|v| !v.is_empty()),
            limit: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Featured projects first, then by display order and newest start date.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Project list", body = inline(crate::api::schemas::SuccessResponse<Vec<ProjectView>>)),
        (status = 500, description = "Unexpected failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    req: HttpRequest,
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: ProjectListFilter = query.into_inner().into();

    match data.project.get_list.execute(filter).await {
        Ok(records) => {
            let urls = url_resolver_for(&req, &data.media);
            ApiResponse::success(ProjectView::present_all(records, &urls))
        }

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
