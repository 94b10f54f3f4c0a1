use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::contact::adapter::incoming::web::routes::ContactMessageRequest;
use crate::modules::contact::adapter::incoming::web::views::ContactMessageView;
use crate::modules::experience::adapter::incoming::web::views::ExperienceView;
use crate::modules::profile::adapter::incoming::web::views::PersonalInfoView;
use crate::modules::project::adapter::incoming::web::views::{ProjectImageView, ProjectView};
use crate::modules::skill::adapter::incoming::web::views::SkillView;
use crate::modules::summary::adapter::incoming::web::views::PortfolioSummaryView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public read API for a personal portfolio, plus the contact form endpoint",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Profile
        crate::modules::profile::adapter::incoming::web::routes::get_personal_info_handler,

        // Skills
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,

        // Experience
        crate::modules::experience::adapter::incoming::web::routes::get_experience_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,

        // Summary
        crate::modules::summary::adapter::incoming::web::routes::get_portfolio_summary_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Views
            PersonalInfoView,
            SkillView,
            ExperienceView,
            ProjectImageView,
            ProjectView,
            ContactMessageView,
            PortfolioSummaryView,

            // Requests
            ContactMessageRequest,
        )
    ),
    tags(
        (name = "profile", description = "Owner profile"),
        (name = "skills", description = "Skill catalogue"),
        (name = "experience", description = "Work history"),
        (name = "projects", description = "Projects and their galleries"),
        (name = "contact", description = "Contact form"),
        (name = "summary", description = "Landing page aggregate"),
    )
)]
pub struct ApiDoc;
