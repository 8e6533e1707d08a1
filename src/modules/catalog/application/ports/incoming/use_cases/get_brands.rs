use async_trait::async_trait;

use crate::catalog::application::domain::entities::Brand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBrandsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetBrandsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Brand>, GetBrandsError>;
}
