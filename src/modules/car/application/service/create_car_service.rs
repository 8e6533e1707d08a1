use async_trait::async_trait;

use crate::modules::car::application::domain::entities::{Car, NewCar};
use crate::modules::car::application::ports::incoming::use_cases::{
    CreateCarError, CreateCarUseCase,
};
use crate::modules::car::application::ports::outgoing::{CarRepository, CarRepositoryError};

pub struct CreateCarService<R>
where
    R: CarRepository,
{
    repository: R,
}

impl<R> CreateCarService<R>
where
    R: CarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCarUseCase for CreateCarService<R>
where
    R: CarRepository + Send + Sync,
{
    async fn execute(&self, car: NewCar) -> Result<Car, CreateCarError> {
        self.repository.create(car).await.map_err(|e| match e {
            CarRepositoryError::NotFound => {
                CreateCarError::RepositoryError("car vanished after insert".to_string())
            }
            CarRepositoryError::DatabaseError(msg) => CreateCarError::RepositoryError(msg),
        })
    }
}
