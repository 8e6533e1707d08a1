// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Ocurrió un error inesperado en el servidor.";
pub const INTERNAL_ERROR_CUSTOM_MESSAGE: &str =
    "Error interno. Por favor, contacte al administrador.";

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

/// Error envelope. `message` carries the technical detail, `custom_message`
/// the text meant for end users.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status: u16,
    pub name: String,
    pub message: String,
    pub custom_message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        let name = status.canonical_reason().unwrap_or("Error").to_string();

        if status.is_server_error() {
            return Self {
                status: status.as_u16(),
                name,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                custom_message: INTERNAL_ERROR_CUSTOM_MESSAGE.to_string(),
            };
        }

        let custom_message = match status {
            StatusCode::BAD_REQUEST => format!(
                "Los datos enviados no son válidos. Por favor, revisa los siguientes errores: {}",
                message
            ),
            StatusCode::UNAUTHORIZED => "No tienes permiso para realizar esta acción.".to_string(),
            StatusCode::NOT_FOUND => "No se pudo encontrar el recurso solicitado.".to_string(),
            _ => "Ocurrió un error en la solicitud.".to_string(),
        };

        Self {
            status: status.as_u16(),
            name,
            message: message.to_string(),
            custom_message,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: StatusCode::OK.as_u16(),
            message: message.to_string(),
            data,
        })
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            status: StatusCode::CREATED.as_u16(),
            message: message.to_string(),
            data,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError::new(status, message))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE,
        )
    }
}
