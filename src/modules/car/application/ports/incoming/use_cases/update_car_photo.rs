use async_trait::async_trait;

use crate::modules::car::application::domain::entities::Car;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCarPhotoError {
    #[error("Invalid car id: {0}")]
    InvalidId(String),

    #[error("Car not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Points an active car at a photo that is already stored and disposes of
/// the photo it referenced before.
#[async_trait]
pub trait UpdateCarPhotoUseCase: Send + Sync {
    async fn execute(&self, car_id: &str, fotografia: String) -> Result<Car, UpdateCarPhotoError>;
}
