use async_trait::async_trait;

use crate::modules::car::application::domain::entities::Car;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCarError {
    #[error("Invalid car id: {0}")]
    InvalidId(String),

    #[error("Car not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleCarUseCase: Send + Sync {
    async fn execute(&self, car_id: &str) -> Result<Car, GetSingleCarError>;
}
