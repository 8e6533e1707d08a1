use async_trait::async_trait;

use crate::catalog::application::domain::entities::CarModel;
use crate::catalog::application::ports::incoming::use_cases::{GetModelsError, GetModelsUseCase};
use crate::catalog::application::ports::outgoing::{CarModelQuery, CarModelQueryError};

pub struct GetModelsService<Q>
where
    Q: CarModelQuery,
{
    query: Q,
}

impl<Q> GetModelsService<Q>
where
    Q: CarModelQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetModelsUseCase for GetModelsService<Q>
where
    Q: CarModelQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CarModel>, GetModelsError> {
        self.query.list_all().await.map_err(|e| match e {
            CarModelQueryError::DatabaseError(msg) => GetModelsError::QueryFailed(msg),
        })
    }
}
