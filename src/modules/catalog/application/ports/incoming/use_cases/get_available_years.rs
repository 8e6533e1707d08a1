use async_trait::async_trait;

use crate::catalog::application::domain::entities::YearRange;

#[async_trait]
pub trait GetAvailableYearsUseCase: Send + Sync {
    async fn execute(&self) -> YearRange;
}
