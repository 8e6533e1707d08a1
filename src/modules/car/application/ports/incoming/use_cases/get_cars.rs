use async_trait::async_trait;

use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::outgoing::CarListFilter;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCarsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCarsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Car>, GetCarsError>;
}
