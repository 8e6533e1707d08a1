// src/modules/car/adapter/outgoing/car_archiver_postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::cars::{Column, Entity};
use crate::modules::car::application::ports::outgoing::{CarArchiver, CarArchiverError};

#[derive(Clone)]
pub struct CarArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarArchiver for CarArchiverPostgres {
    async fn soft_delete(&self, id: Uuid) -> Result<(), CarArchiverError> {
        let res = soft_delete_statement(id, Utc::now())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CarArchiverError::NotFound);
        }

        Ok(())
    }
}

fn soft_delete_statement(id: Uuid, now: DateTime<Utc>) -> UpdateMany<Entity> {
    Entity::update_many()
        .col_expr(Column::FechaDeEliminacion, Expr::value(now))
        .col_expr(Column::FechaDeModificacion, Expr::value(now))
        .filter(Column::Id.eq(id))
        .filter(Column::FechaDeEliminacion.is_null()) // state-aware
}

fn map_db_err(e: DbErr) -> CarArchiverError {
    CarArchiverError::DatabaseError(e.to_string())
}
