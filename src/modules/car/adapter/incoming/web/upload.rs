// src/modules/car/adapter/incoming/web/upload.rs

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm, MultipartFormConfig};
use actix_web::{error::InternalError, HttpResponse};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, warn};

use crate::modules::car::application::domain::entities::{CarFields, CarValidationError};
use crate::modules::car::application::domain::policies::UploadPolicy;
use crate::modules::car::application::ports::outgoing::PhotoStorage;
use crate::shared::api::ApiResponse;

/// Room for the text fields sent alongside the photo.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

// ========================= Forms =========================

/// `multipart/form-data` body of `POST /api/cars`. Every value arrives as
/// text and is parsed here so failures read like the rest of the
/// validation messages.
#[derive(Debug, MultipartForm)]
pub struct CreateCarForm {
    pub marca: Option<Text<String>>,
    pub modelo: Option<Text<String>>,
    pub anio: Option<Text<String>>,
    #[multipart(rename = "año")]
    pub ano: Option<Text<String>>,
    pub precio: Option<Text<String>>,
    pub kilometraje: Option<Text<String>>,
    pub color: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub telefono: Option<Text<String>>,
    pub fotografia: Option<TempFile>,
}

#[derive(Debug, MultipartForm)]
pub struct UpdateCarPhotoForm {
    pub fotografia: Option<TempFile>,
}

fn text(field: Option<Text<String>>) -> Option<String> {
    field
        .map(|t| t.0.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn required(field: Option<Text<String>>, name: &'static str) -> Result<String, CarValidationError> {
    text(field).ok_or(CarValidationError::Missing(name))
}

fn number<T: FromStr>(
    field: Option<Text<String>>,
    name: &'static str,
) -> Result<T, CarValidationError> {
    required(field, name)?
        .parse()
        .map_err(|_| CarValidationError::NotANumber(name))
}

impl CreateCarForm {
    /// Splits the form into raw car fields and the (non-empty) photo part.
    pub fn into_parts(self) -> Result<(CarFields, Option<TempFile>), CarValidationError> {
        let anio = self.anio.or(self.ano);

        let fields = CarFields {
            marca: required(self.marca, "marca")?,
            modelo: required(self.modelo, "modelo")?,
            anio: number(anio, "año")?,
            precio: number(self.precio, "precio")?,
            kilometraje: number(self.kilometraje, "kilometraje")?,
            color: text(self.color),
            email: required(self.email, "email")?,
            telefono: required(self.telefono, "telefono")?,
        };

        Ok((fields, non_empty(self.fotografia)))
    }
}

/// Browsers send an empty part when no file was picked.
pub fn non_empty(file: Option<TempFile>) -> Option<TempFile> {
    file.filter(|f| f.size > 0 || f.file_name.as_deref().is_some_and(|n| !n.is_empty()))
}

// ========================= Config =========================

pub fn multipart_config(max_file_size: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(max_file_size + FORM_OVERHEAD_BYTES)
        .memory_limit(FORM_OVERHEAD_BYTES)
        .error_handler(|err, _req| {
            let response = ApiResponse::bad_request(&err.to_string());
            InternalError::from_response(err, response).into()
        })
}

// ========================= Storage helpers =========================

/// Checks the upload against the policy and copies it into storage.
/// Returns the public URL, or the response to send back.
pub async fn store_photo(
    policy: &UploadPolicy,
    storage: &Arc<dyn PhotoStorage + Send + Sync>,
    file: &TempFile,
) -> Result<String, HttpResponse> {
    let content_type = file.content_type.as_ref().map(|m| m.essence_str());

    let extension = policy
        .check(content_type, file.size)
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))?;

    storage
        .store(file.file.path(), extension)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store car photo");
            ApiResponse::internal_error()
        })
}

/// Best-effort removal of a photo that no record ended up referencing.
pub async fn discard_photo(storage: &Arc<dyn PhotoStorage + Send + Sync>, url: &str) {
    if let Err(e) = storage.remove(url).await {
        warn!(url = %url, error = %e, "Failed to remove orphaned car photo");
    }
}
