use async_trait::async_trait;

use crate::modules::car::application::domain::entities::{Car, CarPatch, CarValidationError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCarError {
    #[error("Invalid car id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Validation(#[from] CarValidationError),

    #[error("Car not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCarUseCase: Send + Sync {
    async fn execute(&self, car_id: &str, patch: CarPatch) -> Result<Car, UpdateCarError>;
}
