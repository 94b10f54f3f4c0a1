pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::contact::application::services::SubmitContactMessageService;
use crate::modules::experience::adapter::outgoing::ExperienceQueryPostgres;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceUseCase;
use crate::modules::experience::application::services::GetExperienceService;
use crate::modules::media::application::domain::MediaConfig;
use crate::modules::profile::adapter::outgoing::PersonalInfoQueryPostgres;
use crate::modules::profile::application::ports::incoming::use_cases::GetPersonalInfoUseCase;
use crate::modules::profile::application::services::GetPersonalInfoService;
use crate::modules::project::adapter::outgoing::ProjectQueryPostgres;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    GetProjectsService, GetSingleProjectService,
};
use crate::modules::skill::adapter::outgoing::SkillQueryPostgres;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::modules::skill::application::services::GetSkillsService;
use crate::modules::summary::application::ports::incoming::use_cases::GetPortfolioSummaryUseCase;
use crate::modules::summary::application::services::GetPortfolioSummaryService;
use crate::shared::api::custom_json_config;

use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub media: MediaConfig,
    pub personal_info: Arc<dyn GetPersonalInfoUseCase + Send + Sync>,
    pub skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub experience: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub project: ProjectUseCases,
    pub submit_contact_message: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub portfolio_summary: Arc<dyn GetPortfolioSummaryUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    let db_arc = Arc::new(conn);

    // Read adapters
    let personal_info_query = PersonalInfoQueryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc));

    let portfolio_summary = GetPortfolioSummaryService::new(
        personal_info_query.clone(),
        project_query.clone(),
        skill_query.clone(),
        experience_query.clone(),
    );

    let state = AppState {
        media: config.media.clone(),
        personal_info: Arc::new(GetPersonalInfoService::new(personal_info_query)),
        skills: Arc::new(GetSkillsService::new(skill_query)),
        experience: Arc::new(GetExperienceService::new(experience_query)),
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query)),
        },
        submit_contact_message: Arc::new(SubmitContactMessageService::new(contact_repo)),
        portfolio_summary: Arc::new(portfolio_summary),
    };

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_personal_info_handler);
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_handler);
    // Experience
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::get_experience_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler);
    // Contact
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,
    );
    // Summary
    cfg.service(
        crate::modules::summary::adapter::incoming::web::routes::get_portfolio_summary_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
