use chrono::Utc;

use super::sea_orm_entity::cars::Model;
use crate::modules::car::application::domain::entities::Car;

pub(crate) fn map_car_model(model: Model) -> Car {
    Car {
        id: model.id,
        marca: model.marca,
        modelo: model.modelo,
        anio: model.anio,
        precio: model.precio,
        kilometraje: model.kilometraje,
        color: model.color,
        email: model.email,
        telefono: model.telefono,
        fotografia: model.fotografia,
        fecha_de_alta: model.fecha_de_alta.with_timezone(&Utc),
        fecha_de_modificacion: model.fecha_de_modificacion.with_timezone(&Utc),
        fecha_de_eliminacion: model.fecha_de_eliminacion.map(|d| d.with_timezone(&Utc)),
    }
}
