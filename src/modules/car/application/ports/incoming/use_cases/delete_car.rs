use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCarError {
    #[error("Invalid car id: {0}")]
    InvalidId(String),

    #[error("Car not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCarUseCase: Send + Sync {
    async fn execute(&self, car_id: &str) -> Result<(), DeleteCarError>;
}
