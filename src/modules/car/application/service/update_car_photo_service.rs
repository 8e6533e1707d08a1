use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::incoming::use_cases::{
    UpdateCarPhotoError, UpdateCarPhotoUseCase,
};
use crate::modules::car::application::ports::outgoing::{
    CarQuery, CarQueryError, CarRepository, CarRepositoryError, PhotoStorage,
};
use crate::shared::id::parse_id;

pub struct UpdateCarPhotoService<Q, R>
where
    Q: CarQuery,
    R: CarRepository,
{
    query: Q,
    repository: R,
    storage: Arc<dyn PhotoStorage + Send + Sync>,
}

impl<Q, R> UpdateCarPhotoService<Q, R>
where
    Q: CarQuery,
    R: CarRepository,
{
    pub fn new(query: Q, repository: R, storage: Arc<dyn PhotoStorage + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateCarPhotoUseCase for UpdateCarPhotoService<Q, R>
where
    Q: CarQuery + Send + Sync,
    R: CarRepository + Send + Sync,
{
    async fn execute(&self, car_id: &str, fotografia: String) -> Result<Car, UpdateCarPhotoError> {
        let id = parse_id(car_id).map_err(|e| UpdateCarPhotoError::InvalidId(e.0))?;

        let current = self
            .query
            .find_active_by_id(id)
            .await
            .map_err(|e| match e {
                CarQueryError::DatabaseError(msg) => UpdateCarPhotoError::RepositoryError(msg),
            })?
            .ok_or(UpdateCarPhotoError::NotFound)?;

        let updated = self
            .repository
            .set_photo(id, fotografia)
            .await
            .map_err(|e| match e {
                CarRepositoryError::NotFound => UpdateCarPhotoError::NotFound,
                CarRepositoryError::DatabaseError(msg) => UpdateCarPhotoError::RepositoryError(msg),
            })?;

        // The record already points at the new photo; a leftover file is
        // only logged.
        if let Some(previous) = current.fotografia {
            if updated.fotografia.as_deref() != Some(previous.as_str()) {
                if let Err(e) = self.storage.remove(&previous).await {
                    warn!(car_id = %id, url = %previous, error = %e, "Failed to remove previous car photo");
                }
            }
        }

        Ok(updated)
    }
}
