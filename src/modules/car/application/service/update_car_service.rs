use async_trait::async_trait;

use crate::modules::car::application::domain::entities::{Car, CarPatch};
use crate::modules::car::application::ports::incoming::use_cases::{
    UpdateCarError, UpdateCarUseCase,
};
use crate::modules::car::application::ports::outgoing::{CarRepository, CarRepositoryError};
use crate::shared::id::parse_id;

pub struct UpdateCarService<R>
where
    R: CarRepository,
{
    repository: R,
}

impl<R> UpdateCarService<R>
where
    R: CarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCarUseCase for UpdateCarService<R>
where
    R: CarRepository + Send + Sync,
{
    async fn execute(&self, car_id: &str, patch: CarPatch) -> Result<Car, UpdateCarError> {
        let id = parse_id(car_id).map_err(|e| UpdateCarError::InvalidId(e.0))?;
        let patch = patch.validated()?;

        self.repository
            .update(id, patch)
            .await
            .map_err(|e| match e {
                CarRepositoryError::NotFound => UpdateCarError::NotFound,
                CarRepositoryError::DatabaseError(msg) => UpdateCarError::RepositoryError(msg),
            })
    }
}
