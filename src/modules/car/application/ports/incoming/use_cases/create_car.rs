use async_trait::async_trait;

use crate::modules::car::application::domain::entities::{Car, NewCar};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCarError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCarUseCase: Send + Sync {
    async fn execute(&self, car: NewCar) -> Result<Car, CreateCarError>;
}
