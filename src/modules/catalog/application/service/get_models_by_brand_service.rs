use async_trait::async_trait;

use crate::catalog::application::domain::entities::CarModel;
use crate::catalog::application::ports::incoming::use_cases::{
    GetModelsByBrandError, GetModelsByBrandUseCase,
};
use crate::catalog::application::ports::outgoing::{CarModelQuery, CarModelQueryError};
use crate::shared::id::parse_id;

pub struct GetModelsByBrandService<Q>
where
    Q: CarModelQuery,
{
    query: Q,
}

impl<Q> GetModelsByBrandService<Q>
where
    Q: CarModelQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetModelsByBrandUseCase for GetModelsByBrandService<Q>
where
    Q: CarModelQuery + Send + Sync,
{
    async fn execute(&self, brand_id: &str) -> Result<Vec<CarModel>, GetModelsByBrandError> {
        let id = parse_id(brand_id).map_err(|e| GetModelsByBrandError::InvalidId(e.0))?;

        self.query.list_by_brand(id).await.map_err(|e| match e {
            CarModelQueryError::DatabaseError(msg) => GetModelsByBrandError::QueryFailed(msg),
        })
    }
}
