// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ProjectRecord, ProjectStatus};
use crate::shared::filter::CodeFilter;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub status: CodeFilter<ProjectStatus>,
    pub featured_only: bool,
    /// First `n` rows of the ordered set.
    pub limit: Option<u64>,
}

impl ProjectListFilter {
    pub fn featured(limit: u64) -> Self {
        Self {
            status: CodeFilter::Any,
            featured_only: true,
            limit: Some(limit),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Ordered featured first, then display order, then newest start date.
    async fn list(&self, filter: ProjectListFilter)
        -> Result<Vec<ProjectRecord>, ProjectQueryError>;

    async fn get_by_id(&self, project_id: Uuid) -> Result<ProjectRecord, ProjectQueryError>;
}
