// src/modules/car/application/ports/outgoing/car_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::car::application::domain::entities::Car;
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Optional listing criteria. Every field that is `None` imposes no
/// predicate; the active-record predicate is always applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarListFilter {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub color: Option<String>,
    pub anio: Option<i32>,
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, active records only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CarQuery: Send + Sync {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Car>, CarQueryError>;

    /// Newest first, tie-broken by id so pages stay stable.
    async fn list(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Car>, CarQueryError>;
}
