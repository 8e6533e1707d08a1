use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{CarPhotoForm, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::car::adapter::incoming::web::errors;
use crate::modules::car::adapter::incoming::web::upload::{
    discard_photo, non_empty, store_photo, UpdateCarPhotoForm,
};
use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::incoming::use_cases::UpdateCarPhotoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upload a car photo
///
/// Replaces the car's photo. The previous file is removed once the car
/// points at the new one.
#[utoipa::path(
    post,
    path = "/api/cars/{id}/photo",
    tag = "cars",
    params(("id" = String, Path, description = "Car UUID")),
    request_body(content = CarPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored and linked", body = inline(SuccessResponse<Car>)),
        (status = 400, description = "Malformed id, missing or invalid image", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No active car with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/cars/{id}/photo")]
pub async fn update_car_photo_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    MultipartForm(form): MultipartForm<UpdateCarPhotoForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    let Some(file) = non_empty(form.fotografia) else {
        return ApiResponse::bad_request("No se ha subido ningún archivo de imagen.");
    };

    let url = match store_photo(&data.upload_policy, &data.photo_storage, &file).await {
        Ok(url) => url,
        Err(response) => return response,
    };

    match data.car.update_photo.execute(&car_id, url.clone()).await {
        Ok(car) => {
            info!(car_id = %car.id, user_id = %user.user_id, "Car photo updated");
            ApiResponse::success("Foto del carro subida y actualizada exitosamente.", car)
        }
        Err(e) => {
            discard_photo(&data.photo_storage, &url).await;
            match e {
                UpdateCarPhotoError::InvalidId(raw) => errors::invalid_id(&raw),
                UpdateCarPhotoError::NotFound => errors::car_not_found(&car_id),
                UpdateCarPhotoError::RepositoryError(e) => {
                    errors::internal("Failed to update car photo", &e)
                }
            }
        }
    }
}
