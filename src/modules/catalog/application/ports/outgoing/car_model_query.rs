use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::CarModel;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarModelQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the model catalog. Results are ordered by name.
#[async_trait]
pub trait CarModelQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CarModel>, CarModelQueryError>;

    async fn list_by_brand(&self, brand_id: Uuid) -> Result<Vec<CarModel>, CarModelQueryError>;
}
