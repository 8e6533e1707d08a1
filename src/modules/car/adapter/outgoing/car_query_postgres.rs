// src/modules/car/adapter/outgoing/car_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::car_model_mapper::map_car_model;
use super::sea_orm_entity::cars::{Column, Entity};
use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::outgoing::{CarListFilter, CarQuery, CarQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct CarQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarQuery for CarQueryPostgres {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Car>, CarQueryError> {
        let car = Entity::find_by_id(id)
            .filter(Column::FechaDeEliminacion.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(car.map(map_car_model))
    }

    async fn list(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Car>, CarQueryError> {
        let query = filtered_query(&filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let rows = query
            .order_by_desc(Column::FechaDeAlta)
            .order_by_desc(Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            rows.into_iter().map(map_car_model).collect(),
            page,
            total,
        ))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Active cars narrowed by every criterion present in `filter`.
fn filtered_query(filter: &CarListFilter) -> Select<Entity> {
    let mut query = Entity::find().filter(Column::FechaDeEliminacion.is_null());

    if let Some(marca) = &filter.marca {
        query = query.filter(Column::Marca.like(substring_pattern(marca)));
    }
    if let Some(modelo) = &filter.modelo {
        query = query.filter(Column::Modelo.like(substring_pattern(modelo)));
    }
    if let Some(color) = &filter.color {
        query = query.filter(Column::Color.like(substring_pattern(color)));
    }
    if let Some(anio) = filter.anio {
        query = query.filter(Column::Anio.eq(anio));
    }

    query = match (filter.precio_min, filter.precio_max) {
        (Some(min), Some(max)) => query.filter(Column::Precio.between(min, max)),
        (Some(min), None) => query.filter(Column::Precio.gte(min)),
        (None, Some(max)) => query.filter(Column::Precio.lte(max)),
        (None, None) => query,
    };

    query
}

const LIKE_ESCAPE: char = '!';

/// `%value%` with the LIKE wildcards in `value` matched literally.
fn substring_pattern(value: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

fn map_db_err(e: DbErr) -> CarQueryError {
    CarQueryError::DatabaseError(e.to_string())
}
