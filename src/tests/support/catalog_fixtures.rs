use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::catalog::adapter::outgoing::sea_orm_entity::{brands, models};
use crate::catalog::application::domain::entities::{Brand, CarModel};

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

pub fn brand(nombre: &str) -> Brand {
    Brand {
        id: Uuid::new_v4(),
        nombre: nombre.to_string(),
        fecha_de_alta: seeded_at(),
        fecha_de_modificacion: seeded_at(),
    }
}

pub fn car_model(nombre: &str, marca_id: Uuid) -> CarModel {
    CarModel {
        id: Uuid::new_v4(),
        nombre: nombre.to_string(),
        marca_id,
        fecha_de_alta: seeded_at(),
        fecha_de_modificacion: seeded_at(),
    }
}

pub fn brand_row(brand: &Brand) -> brands::Model {
    brands::Model {
        id: brand.id,
        nombre: brand.nombre.clone(),
        fecha_de_alta: brand.fecha_de_alta.into(),
        fecha_de_modificacion: brand.fecha_de_modificacion.into(),
    }
}

pub fn model_row(model: &CarModel) -> models::Model {
    models::Model {
        id: model.id,
        nombre: model.nombre.clone(),
        marca_id: model.marca_id,
        fecha_de_alta: model.fecha_de_alta.into(),
        fecha_de_modificacion: model.fecha_de_modificacion.into(),
    }
}
