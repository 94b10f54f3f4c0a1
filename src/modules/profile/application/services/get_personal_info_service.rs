use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoRecord;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPersonalInfoError, GetPersonalInfoUseCase,
};
use crate::modules::profile::application::ports::outgoing::PersonalInfoQuery;

pub struct GetPersonalInfoService<Q>
where
    Q: PersonalInfoQuery,
{
    query: Q,
}

impl<Q> GetPersonalInfoService<Q>
where
    Q: PersonalInfoQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPersonalInfoUseCase for GetPersonalInfoService<Q>
where
    Q: PersonalInfoQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PersonalInfoRecord>, GetPersonalInfoError> {
        self.query
            .list_active()
            .await
            .map_err(GetPersonalInfoError::from)
    }
}
