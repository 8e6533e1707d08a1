use async_trait::async_trait;

use crate::catalog::application::domain::entities::CarModel;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetModelsByBrandError {
    #[error("Invalid brand id: {0}")]
    InvalidId(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetModelsByBrandUseCase: Send + Sync {
    /// An unknown but well-formed brand id yields an empty list.
    async fn execute(&self, brand_id: &str) -> Result<Vec<CarModel>, GetModelsByBrandError>;
}
