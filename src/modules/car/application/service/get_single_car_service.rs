use async_trait::async_trait;

use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::incoming::use_cases::{
    GetSingleCarError, GetSingleCarUseCase,
};
use crate::modules::car::application::ports::outgoing::{CarQuery, CarQueryError};
use crate::shared::id::parse_id;

pub struct GetSingleCarService<Q>
where
    Q: CarQuery,
{
    query: Q,
}

impl<Q> GetSingleCarService<Q>
where
    Q: CarQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCarUseCase for GetSingleCarService<Q>
where
    Q: CarQuery + Send + Sync,
{
    async fn execute(&self, car_id: &str) -> Result<Car, GetSingleCarError> {
        let id = parse_id(car_id).map_err(|e| GetSingleCarError::InvalidId(e.0))?;

        self.query
            .find_active_by_id(id)
            .await
            .map_err(|e| match e {
                CarQueryError::DatabaseError(msg) => GetSingleCarError::RepositoryError(msg),
            })?
            .ok_or(GetSingleCarError::NotFound)
    }
}
