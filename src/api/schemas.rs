// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// HTTP status code, repeated in the body
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Carro encontrado exitosamente.")]
    pub message: String,
    /// Response payload, `null` when the operation returns nothing
    pub data: T,
}

/// Standard error envelope
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = 404)]
    pub status: u16,

    /// Reason phrase of the status code
    #[schema(example = "Not Found")]
    pub name: String,

    /// Technical detail
    #[schema(example = "Car with ID 5e0c6f0e-3f6b-4f7a-a5ad-6d1b8b0e6f10 not found")]
    pub message: String,

    /// Message meant for end users
    #[schema(example = "No se pudo encontrar el recurso solicitado.")]
    pub custom_message: String,
}

/// `multipart/form-data` body of `POST /api/cars`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CarForm {
    #[schema(example = "Toyota")]
    pub marca: String,
    #[schema(example = "Corolla")]
    pub modelo: String,
    /// Also accepted as `año`
    #[schema(example = 2023)]
    pub anio: i32,
    #[schema(example = 25000.0)]
    pub precio: f64,
    #[schema(example = 15000)]
    pub kilometraje: i32,
    pub color: Option<String>,
    #[schema(example = "seller@example.com")]
    pub email: String,
    #[schema(example = "961-187-9041")]
    pub telefono: String,
    /// JPEG, PNG or WEBP image
    #[schema(value_type = Option<String>, format = Binary)]
    pub fotografia: Option<Vec<u8>>,
}

/// `multipart/form-data` body of `POST /api/cars/{id}/photo`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CarPhotoForm {
    /// JPEG, PNG or WEBP image
    #[schema(value_type = String, format = Binary)]
    pub fotografia: Vec<u8>,
}
