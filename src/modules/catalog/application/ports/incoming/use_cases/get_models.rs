use async_trait::async_trait;

use crate::catalog::application::domain::entities::CarModel;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetModelsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetModelsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CarModel>, GetModelsError>;
}
