use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{CarForm, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::car::adapter::incoming::web::errors;
use crate::modules::car::adapter::incoming::web::upload::{
    discard_photo, store_photo, CreateCarForm,
};
use crate::modules::car::application::domain::entities::{Car, NewCar};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a car listing
///
/// Accepts the listing as `multipart/form-data` with an optional
/// `fotografia` image.
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = "cars",
    request_body(content = CarForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Car created", body = inline(SuccessResponse<Car>)),
        (status = 400, description = "Invalid fields or image", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/cars")]
pub async fn create_car_handler(
    user: AuthenticatedUser,
    MultipartForm(form): MultipartForm<CreateCarForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (fields, photo) = match form.into_parts() {
        Ok(parts) => parts,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    // Validate before touching storage so a rejected listing leaves no file behind
    let mut new_car = match NewCar::new(fields, None) {
        Ok(car) => car,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    if let Some(file) = photo.as_ref() {
        match store_photo(&data.upload_policy, &data.photo_storage, file).await {
            Ok(url) => new_car.fotografia = Some(url),
            Err(response) => return response,
        }
    }
    let stored_photo = new_car.fotografia.clone();

    match data.car.create.execute(new_car).await {
        Ok(car) => {
            info!(car_id = %car.id, user_id = %user.user_id, "Car created");
            ApiResponse::created("Carro creado exitosamente.", car)
        }
        Err(e) => {
            if let Some(url) = stored_photo {
                discard_photo(&data.photo_storage, &url).await;
            }
            errors::internal("Car creation failed", &e.to_string())
        }
    }
}
