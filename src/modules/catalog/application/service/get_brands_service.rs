use async_trait::async_trait;

use crate::catalog::application::domain::entities::Brand;
use crate::catalog::application::ports::incoming::use_cases::{GetBrandsError, GetBrandsUseCase};
use crate::catalog::application::ports::outgoing::{BrandQuery, BrandQueryError};

pub struct GetBrandsService<Q>
where
    Q: BrandQuery,
{
    query: Q,
}

impl<Q> GetBrandsService<Q>
where
    Q: BrandQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBrandsUseCase for GetBrandsService<Q>
where
    Q: BrandQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Brand>, GetBrandsError> {
        self.query.list_all().await.map_err(|e| match e {
            BrandQueryError::DatabaseError(msg) => GetBrandsError::QueryFailed(msg),
        })
    }
}
