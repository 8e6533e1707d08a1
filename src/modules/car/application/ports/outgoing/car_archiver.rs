// src/modules/car/application/ports/outgoing/car_archiver.rs

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarArchiverError {
    /// Car doesn't exist OR was already deleted.
    #[error("Car not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CarArchiver: Send + Sync {
    async fn soft_delete(&self, id: Uuid) -> Result<(), CarArchiverError>;
}
