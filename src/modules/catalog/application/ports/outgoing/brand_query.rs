use async_trait::async_trait;

use crate::catalog::application::domain::entities::Brand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrandQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BrandQuery: Send + Sync {
    /// All brands ordered by name.
    async fn list_all(&self) -> Result<Vec<Brand>, BrandQueryError>;
}
