use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::models::{Column, Entity, Model};
use crate::catalog::application::domain::entities::CarModel;
use crate::catalog::application::ports::outgoing::{CarModelQuery, CarModelQueryError};

#[derive(Clone)]
pub struct CarModelQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarModelQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<Entity>) -> Result<Vec<CarModel>, CarModelQueryError> {
        let rows = query
            .order_by_asc(Column::Nombre)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(map_car_model_row).collect())
    }
}

#[async_trait]
impl CarModelQuery for CarModelQueryPostgres {
    async fn list_all(&self) -> Result<Vec<CarModel>, CarModelQueryError> {
        self.fetch(Entity::find()).await
    }

    async fn list_by_brand(&self, brand_id: Uuid) -> Result<Vec<CarModel>, CarModelQueryError> {
        self.fetch(by_brand(brand_id)).await
    }
}

fn by_brand(brand_id: Uuid) -> Select<Entity> {
    Entity::find().filter(Column::MarcaId.eq(brand_id))
}

fn map_car_model_row(model: Model) -> CarModel {
    CarModel {
        id: model.id,
        nombre: model.nombre,
        marca_id: model.marca_id,
        fecha_de_alta: model.fecha_de_alta.with_timezone(&Utc),
        fecha_de_modificacion: model.fecha_de_modificacion.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> CarModelQueryError {
    CarModelQueryError::DatabaseError(e.to_string())
}
