use async_trait::async_trait;

use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::incoming::use_cases::{GetCarsError, GetCarsUseCase};
use crate::modules::car::application::ports::outgoing::{CarListFilter, CarQuery, CarQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct GetCarsService<Q>
where
    Q: CarQuery,
{
    query: Q,
}

impl<Q> GetCarsService<Q>
where
    Q: CarQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCarsUseCase for GetCarsService<Q>
where
    Q: CarQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Car>, GetCarsError> {
        self.query.list(filter, page).await.map_err(|e| match e {
            CarQueryError::DatabaseError(msg) => GetCarsError::QueryFailed(msg),
        })
    }
}
