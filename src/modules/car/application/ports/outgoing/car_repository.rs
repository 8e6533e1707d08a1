// src/modules/car/application/ports/outgoing/car_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::car::application::domain::entities::{Car, CarPatch, NewCar};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarRepositoryError {
    /// No active car with that id.
    #[error("Car not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, car: NewCar) -> Result<Car, CarRepositoryError>;

    /// Applies the provided fields to an active car and bumps its
    /// modification timestamp.
    async fn update(&self, id: Uuid, patch: CarPatch) -> Result<Car, CarRepositoryError>;

    async fn set_photo(&self, id: Uuid, fotografia: String) -> Result<Car, CarRepositoryError>;
}
