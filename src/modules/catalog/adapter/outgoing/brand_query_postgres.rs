use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::brands::{Column, Entity, Model};
use crate::catalog::application::domain::entities::Brand;
use crate::catalog::application::ports::outgoing::{BrandQuery, BrandQueryError};

#[derive(Clone)]
pub struct BrandQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BrandQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandQuery for BrandQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Brand>, BrandQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Nombre)
            .all(&*self.db)
            .await
            .map_err(|e| BrandQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(map_brand_model).collect())
    }
}

fn map_brand_model(model: Model) -> Brand {
    Brand {
        id: model.id,
        nombre: model.nombre,
        fecha_de_alta: model.fecha_de_alta.with_timezone(&Utc),
        fecha_de_modificacion: model.fecha_de_modificacion.with_timezone(&Utc),
    }
}
