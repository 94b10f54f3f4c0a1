use actix_web::{get, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::media::adapter::incoming::web::url_resolver_for;
use crate::modules::skill::adapter::incoming::web::views::SkillView;
use crate::modules::skill::application::domain::entities::SkillCategory;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::modules::skill::application::ports::outgoing::SkillListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::filter::CodeFilter;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkillListQuery {
    /// One of `technical`, `soft`, `language`, `tool`. Any other non-empty value matches nothing.
    pub category: Option<String>,
    /// Any non-empty value restricts the list to featured skills.
    pub featured: Option<String>,
}

impl From<SkillListQuery> for SkillListFilter {
    fn from(q: SkillListQuery) -> Self {
        SkillListFilter {
            category: CodeFilter::from_param(q.category.as_deref(), SkillCategory::from_code),
            featured_only: q.featured.is_some_and(|v| !v.is_empty()),
        }
    }
}

/// List skills
///
/// Returns skills ordered by category, display order and name.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(SkillListQuery),
    responses(
        (status = 200, description = "Skill list", body = inline(crate::api::schemas::SuccessResponse<Vec<SkillView>>)),
        (status = 500, description = "Unexpected failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    req: HttpRequest,
    query: web::Query<SkillListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: SkillListFilter = query.into_inner().into();

    match data.skills.execute(filter).await {
        Ok(records) => {
            let urls = url_resolver_for(&req, &data.media);
            ApiResponse::success(SkillView::present_all(records, &urls))
        }

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn known_category_and_featured_flag_become_filters() {
        let filter: SkillListFilter = SkillListQuery {
            category: Some("language".into()),
            featured: Some("true".into()),
        }
        .into();

        assert_eq!(filter.category, CodeFilter::Is(SkillCategory::Language));
        assert!(filter.featured_only);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let filter: SkillListFilter = SkillListQuery {
            category: Some("cooking".into()),
            featured: None,
        }
        .into();

        assert_eq!(filter.category, CodeFilter::Unknown);
        assert!(!filter.featured_only);
    }

    #[test]
    fn featured_false_still_filters_but_empty_does_not() {
        let literal_false: SkillListFilter = SkillListQuery {
            category: None,
            featured: Some("false".into()),
        }
        .into();
        let empty: SkillListFilter = SkillListQuery {
            category: Some(String::new()),
            featured: Some(String::new()),
        }
        .into();

        assert!(literal_false.featured_only);
        assert_eq!(empty, SkillListFilter::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::modules::skill::application::domain::entities::SkillRecord;
    use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{image_asset, sample_skill};

    /* --------------------------------------------------
     * Mock GetSkillsUseCase
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockGetSkillsUseCase {
        result: Result<Vec<SkillRecord>, GetSkillsError>,
        seen_filter: Arc<Mutex<Option<SkillListFilter>>>,
    }

    impl MockGetSkillsUseCase {
        fn success(skills: Vec<SkillRecord>) -> Self {
            Self {
                result: Ok(skills),
                seen_filter: Arc::new(Mutex::new(None)),
            }
        }

        fn error(err: GetSkillsError) -> Self {
            Self {
                result: Err(err),
                seen_filter: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl GetSkillsUseCase for MockGetSkillsUseCase {
        async fn execute(
            &self,
            filter: SkillListFilter,
        ) -> Result<Vec<SkillRecord>, GetSkillsError> {
            *self.seen_filter.lock().unwrap() = Some(filter);
            self.result.clone()
        }
    }

    async fn call(uc: MockGetSkillsUseCase, uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_get_skills(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_skills_handler)).await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Host", "portfolio.test"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    /* --------------------------------------------------
     * Handler
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_skills_success() {
        let mut skill = sample_skill("Rust", SkillCategory::Technical);
        skill.icon = Some(image_asset("skills/icons/rust.svg"));

        let (status, body) = call(MockGetSkillsUseCase::success(vec![skill]), "/api/skills").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["error"].is_null());

        let first = &body["data"][0];
        assert_eq!(first["name"], "Rust");
        assert_eq!(first["category"], "technical");
        assert_eq!(first["category_display"], "Technical");
        assert_eq!(
            first["icon_url"],
            "http://portfolio.test/media/skills/icons/rust.svg"
        );
    }

    #[actix_web::test]
    async fn test_get_skills_empty_list() {
        let (status, body) = call(MockGetSkillsUseCase::success(vec![]), "/api/skills").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_get_skills_forwards_query_filters() {
        let uc = MockGetSkillsUseCase::success(vec![]);
        let seen = uc.seen_filter.clone();

        let (status, _) = call(uc, "/api/skills?category=tool&featured=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            seen.lock().unwrap().clone(),
            Some(SkillListFilter {
                category: CodeFilter::Is(SkillCategory::Tool),
                featured_only: true,
            })
        );
    }

    #[actix_web::test]
    async fn test_get_skills_unknown_category_is_not_widened() {
        let uc = MockGetSkillsUseCase::success(vec![]);
        let seen = uc.seen_filter.clone();

        let (status, body) = call(uc, "/api/skills?category=cooking").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
        assert_eq!(
            seen.lock().unwrap().clone().map(|f| f.category),
            Some(CodeFilter::Unknown)
        );
    }

    #[actix_web::test]
    async fn test_get_skills_query_failure_is_opaque() {
        let uc = MockGetSkillsUseCase::error(GetSkillsError::QueryFailed(
            "relation \"skills\" does not exist".into(),
        ));

        let (status, body) = call(uc, "/api/skills").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("skills"));
    }
}
