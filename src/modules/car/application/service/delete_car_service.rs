use async_trait::async_trait;

use crate::modules::car::application::ports::incoming::use_cases::{
    DeleteCarError, DeleteCarUseCase,
};
use crate::modules::car::application::ports::outgoing::{CarArchiver, CarArchiverError};
use crate::shared::id::parse_id;

/// Soft delete: the row stays, stamped with its deletion time, and drops
/// out of every read path.
pub struct DeleteCarService<A>
where
    A: CarArchiver,
{
    archiver: A,
}

impl<A> DeleteCarService<A>
where
    A: CarArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> DeleteCarUseCase for DeleteCarService<A>
where
    A: CarArchiver + Send + Sync,
{
    async fn execute(&self, car_id: &str) -> Result<(), DeleteCarError> {
        let id = parse_id(car_id).map_err(|e| DeleteCarError::InvalidId(e.0))?;

        self.archiver.soft_delete(id).await.map_err(|e| match e {
            CarArchiverError::NotFound => DeleteCarError::NotFound,
            CarArchiverError::DatabaseError(msg) => DeleteCarError::RepositoryError(msg),
        })
    }
}
