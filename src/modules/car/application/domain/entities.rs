use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MIN_YEAR: i32 = 1900;
pub const MIN_KILOMETRAJE: i32 = 100;
pub const MIN_TEXT_LENGTH: usize = 2;

/// Accepts `961-187-9041`, `961 187 9041` and `9611879041` style numbers.
static TELEFONO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2,3}[\s-]?\d{3,4}[\s-]?\d{4}$").expect("telefono pattern compiles")
});

// ========================= Car =========================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    #[schema(example = "Toyota")]
    pub marca: String,
    #[schema(example = "Corolla")]
    pub modelo: String,
    #[serde(rename = "año")]
    #[schema(example = 2023)]
    pub anio: i32,
    #[schema(example = 15000.0)]
    pub precio: f64,
    #[schema(example = 12000)]
    pub kilometraje: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub email: String,
    #[schema(example = "961-187-9041")]
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fotografia: Option<String>,
    pub fecha_de_alta: DateTime<Utc>,
    pub fecha_de_modificacion: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_de_eliminacion: Option<DateTime<Utc>>,
}

// ========================= Validation =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarValidationError {
    #[error("El campo {0} es requerido.")]
    Missing(&'static str),

    #[error("El campo {0} debe ser numérico.")]
    NotANumber(&'static str),

    #[error("La marca debe tener al menos 2 caracteres.")]
    MarcaTooShort,

    #[error("El modelo debe tener al menos 2 caracteres.")]
    ModeloTooShort,

    #[error("El año debe ser mayor a 1900.")]
    AnioTooOld,

    #[error("El precio debe ser un valor positivo.")]
    PrecioNotPositive,

    #[error("El kilometraje debe ser mayor a 100.")]
    KilometrajeTooLow,

    #[error("El formato del email no es válido.")]
    InvalidEmail,

    #[error("El teléfono debe tener el formato 961-187-9041 o 9611879041.")]
    InvalidTelefono,
}

pub(crate) fn validate_marca(marca: &str) -> Result<String, CarValidationError> {
    let marca = marca.trim();
    if marca.chars().count() < MIN_TEXT_LENGTH {
        return Err(CarValidationError::MarcaTooShort);
    }
    Ok(marca.to_string())
}

pub(crate) fn validate_modelo(modelo: &str) -> Result<String, CarValidationError> {
    let modelo = modelo.trim();
    if modelo.chars().count() < MIN_TEXT_LENGTH {
        return Err(CarValidationError::ModeloTooShort);
    }
    Ok(modelo.to_string())
}

pub(crate) fn validate_anio(anio: i32) -> Result<i32, CarValidationError> {
    if anio < MIN_YEAR {
        return Err(CarValidationError::AnioTooOld);
    }
    Ok(anio)
}

pub(crate) fn validate_precio(precio: f64) -> Result<f64, CarValidationError> {
    if !precio.is_finite() || precio <= 0.0 {
        return Err(CarValidationError::PrecioNotPositive);
    }
    Ok(precio)
}

fn validate_kilometraje(kilometraje: i32) -> Result<i32, CarValidationError> {
    if kilometraje < MIN_KILOMETRAJE {
        return Err(CarValidationError::KilometrajeTooLow);
    }
    Ok(kilometraje)
}

fn validate_email(email: &str) -> Result<String, CarValidationError> {
    let email = email.trim();
    if !EmailAddress::is_valid(email) {
        return Err(CarValidationError::InvalidEmail);
    }
    Ok(email.to_string())
}

fn validate_telefono(telefono: &str) -> Result<String, CarValidationError> {
    let telefono = telefono.trim();
    if !TELEFONO_PATTERN.is_match(telefono) {
        return Err(CarValidationError::InvalidTelefono);
    }
    Ok(telefono.to_string())
}

fn normalize_color(color: Option<String>) -> Option<String> {
    color
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

// ========================= NewCar =========================

/// Unvalidated field set as it arrives from a client.
#[derive(Debug, Clone, Default)]
pub struct CarFields {
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub precio: f64,
    pub kilometraje: i32,
    pub color: Option<String>,
    pub email: String,
    pub telefono: String,
}

/// A car listing that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub precio: f64,
    pub kilometraje: i32,
    pub color: Option<String>,
    pub email: String,
    pub telefono: String,
    pub fotografia: Option<String>,
}

impl NewCar {
    pub fn new(fields: CarFields, fotografia: Option<String>) -> Result<Self, CarValidationError> {
        Ok(Self {
            marca: validate_marca(&fields.marca)?,
            modelo: validate_modelo(&fields.modelo)?,
            anio: validate_anio(fields.anio)?,
            precio: validate_precio(fields.precio)?,
            kilometraje: validate_kilometraje(fields.kilometraje)?,
            color: normalize_color(fields.color),
            email: validate_email(&fields.email)?,
            telefono: validate_telefono(&fields.telefono)?,
            fotografia,
        })
    }
}

// ========================= CarPatch =========================

/// Partial update. Absent fields keep their stored value; identity and
/// lifecycle timestamps are not part of the patch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CarPatch {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    #[serde(alias = "año")]
    pub anio: Option<i32>,
    pub precio: Option<f64>,
    pub kilometraje: Option<i32>,
    pub color: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

impl CarPatch {
    /// Applies the field rules to every provided value and returns the
    /// normalized patch.
    pub fn validated(self) -> Result<Self, CarValidationError> {
        Ok(Self {
            marca: self.marca.as_deref().map(validate_marca).transpose()?,
            modelo: self.modelo.as_deref().map(validate_modelo).transpose()?,
            anio: self.anio.map(validate_anio).transpose()?,
            precio: self.precio.map(validate_precio).transpose()?,
            kilometraje: self.kilometraje.map(validate_kilometraje).transpose()?,
            color: normalize_color(self.color),
            email: self.email.as_deref().map(validate_email).transpose()?,
            telefono: self.telefono.as_deref().map(validate_telefono).transpose()?,
        })
    }
}
