use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::car::adapter::outgoing::sea_orm_entity::cars;
use crate::modules::car::application::domain::entities::{Car, CarFields, NewCar};

pub fn sample_car() -> Car {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    Car {
        id: Uuid::new_v4(),
        marca: "Toyota".to_string(),
        modelo: "Corolla".to_string(),
        anio: 2023,
        precio: 15000.0,
        kilometraje: 12000,
        color: Some("Rojo".to_string()),
        email: "seller@example.com".to_string(),
        telefono: "961-187-9041".to_string(),
        fotografia: None,
        fecha_de_alta: created,
        fecha_de_modificacion: created,
        fecha_de_eliminacion: None,
    }
}

pub fn sample_car_with_photo(url: &str) -> Car {
    Car {
        fotografia: Some(url.to_string()),
        ..sample_car()
    }
}

pub fn corolla_fields() -> CarFields {
    CarFields {
        marca: "Toyota".to_string(),
        modelo: "Corolla".to_string(),
        anio: 2023,
        precio: 15000.0,
        kilometraje: 12000,
        color: Some("Rojo".to_string()),
        email: "seller@example.com".to_string(),
        telefono: "961-187-9041".to_string(),
    }
}

pub fn sample_new_car() -> NewCar {
    NewCar::new(corolla_fields(), None).unwrap()
}

pub fn car_row(car: &Car) -> cars::Model {
    cars::Model {
        id: car.id,
        marca: car.marca.clone(),
        modelo: car.modelo.clone(),
        anio: car.anio,
        precio: car.precio,
        kilometraje: car.kilometraje,
        color: car.color.clone(),
        email: car.email.clone(),
        telefono: car.telefono.clone(),
        fotografia: car.fotografia.clone(),
        fecha_de_alta: car.fecha_de_alta.into(),
        fecha_de_modificacion: car.fecha_de_modificacion.into(),
        fecha_de_eliminacion: car.fecha_de_eliminacion.map(Into::into),
    }
}
