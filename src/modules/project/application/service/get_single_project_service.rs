use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectRecord;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ProjectRecord, GetSingleProjectError> {
        self.query
            .get_by_id(project_id)
            .await
            .map_err(GetSingleProjectError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::project::application::ports::outgoing::project_query::{
        ProjectListFilter, ProjectQueryError,
    };
    use crate::tests::support::fixtures::sample_project;

    /* --------------------------------------------------
     * Mock ProjectQuery
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockProjectQuery {
        result: Result<ProjectRecord, ProjectQueryError>,
    }

    impl MockProjectQuery {
        fn success(record: ProjectRecord) -> Self {
            Self { result: Ok(record) }
        }

        fn error(err: ProjectQueryError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list(
            &self,
            _filter: ProjectListFilter,
        ) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
            unimplemented!("not used in GetSingleProjectService tests")
        }

        async fn get_by_id(&self, _project_id: Uuid) -> Result<ProjectRecord, ProjectQueryError> {
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_success() {
        let record = sample_project("Test Project");
        let project_id = record.id;
        let service = GetSingleProjectService::new(MockProjectQuery::success(record));

        let result = service.execute(project_id).await;

        assert!(result.is_ok());
        let record = result.unwrap();
        assert_eq!(record.id, project_id);
        assert_eq!(record.title, "Test Project");
    }

    #[tokio::test]
    async fn execute_not_found() {
        let service = GetSingleProjectService::new(MockProjectQuery::error(
            ProjectQueryError::NotFound,
        ));

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetSingleProjectError::NotFound)));
    }

    #[tokio::test]
    async fn execute_database_error() {
        let service = GetSingleProjectService::new(MockProjectQuery::error(
            ProjectQueryError::DatabaseError("db failure".into()),
        ));

        let result = service.execute(Uuid::new_v4()).await;

        match result {
            Err(GetSingleProjectError::QueryFailed(msg)) => assert_eq!(msg, "db failure"),
            _ => panic!("Expected QueryFailed"),
        }
    }
}
