// src/modules/car/adapter/outgoing/car_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use std::sync::Arc;
use uuid::Uuid;

use super::car_model_mapper::map_car_model;
use super::sea_orm_entity::cars::{ActiveModel, Column, Entity, Model};
use crate::modules::car::application::domain::entities::{Car, CarPatch, NewCar};
use crate::modules::car::application::ports::outgoing::{CarRepository, CarRepositoryError};

#[derive(Clone)]
pub struct CarRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_active(&self, id: Uuid) -> Result<Model, CarRepositoryError> {
        Entity::find_by_id(id)
            .filter(Column::FechaDeEliminacion.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CarRepositoryError::NotFound)
    }
}

#[async_trait]
impl CarRepository for CarRepositoryPostgres {
    async fn create(&self, car: NewCar) -> Result<Car, CarRepositoryError> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            marca: Set(car.marca),
            modelo: Set(car.modelo),
            anio: Set(car.anio),
            precio: Set(car.precio),
            kilometraje: Set(car.kilometraje),
            color: Set(car.color),
            email: Set(car.email),
            telefono: Set(car.telefono),
            fotografia: Set(car.fotografia),
            fecha_de_alta: Set(now.into()),
            fecha_de_modificacion: Set(now.into()),
            fecha_de_eliminacion: Set(None),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(map_car_model(inserted))
    }

    async fn update(&self, id: Uuid, patch: CarPatch) -> Result<Car, CarRepositoryError> {
        let mut model = self.find_active(id).await?.into_active_model();

        if let Some(marca) = patch.marca {
            model.marca = Set(marca);
        }
        if let Some(modelo) = patch.modelo {
            model.modelo = Set(modelo);
        }
        if let Some(anio) = patch.anio {
            model.anio = Set(anio);
        }
        if let Some(precio) = patch.precio {
            model.precio = Set(precio);
        }
        if let Some(kilometraje) = patch.kilometraje {
            model.kilometraje = Set(kilometraje);
        }
        if let Some(color) = patch.color {
            model.color = Set(Some(color));
        }
        if let Some(email) = patch.email {
            model.email = Set(email);
        }
        if let Some(telefono) = patch.telefono {
            model.telefono = Set(telefono);
        }
        model.fecha_de_modificacion = Set(Utc::now().into());

        let updated = model.update(&*self.db).await.map_err(map_update_err)?;

        Ok(map_car_model(updated))
    }

    async fn set_photo(&self, id: Uuid, fotografia: String) -> Result<Car, CarRepositoryError> {
        let mut model = self.find_active(id).await?.into_active_model();

        model.fotografia = Set(Some(fotografia));
        model.fecha_de_modificacion = Set(Utc::now().into());

        let updated = model.update(&*self.db).await.map_err(map_update_err)?;

        Ok(map_car_model(updated))
    }
}

fn map_db_err(e: DbErr) -> CarRepositoryError {
    CarRepositoryError::DatabaseError(e.to_string())
}

// The row can disappear between the lookup and the write.
fn map_update_err(e: DbErr) -> CarRepositoryError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => CarRepositoryError::NotFound,
        other => map_db_err(other),
    }
}
