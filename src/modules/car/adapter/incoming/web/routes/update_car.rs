use actix_web::{put, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::car::adapter::incoming::web::errors;
use crate::modules::car::application::domain::entities::{Car, CarPatch};
use crate::modules::car::application::ports::incoming::use_cases::UpdateCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a car
///
/// Partial update: absent fields keep their stored value. The id and the
/// creation and deletion timestamps cannot be changed.
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    tag = "cars",
    params(("id" = String, Path, description = "Car UUID")),
    request_body = CarPatch,
    responses(
        (status = 200, description = "Car updated", body = inline(SuccessResponse<Car>)),
        (status = 400, description = "Malformed id or invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No active car with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/cars/{id}")]
pub async fn update_car_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CarPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.update.execute(&car_id, payload.into_inner()).await {
        Ok(car) => {
            info!(car_id = %car.id, user_id = %user.user_id, "Car updated");
            ApiResponse::success("Carro actualizado exitosamente.", car)
        }
        Err(UpdateCarError::InvalidId(raw)) => errors::invalid_id(&raw),
        Err(UpdateCarError::Validation(e)) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateCarError::NotFound) => errors::car_not_found(&car_id),
        Err(UpdateCarError::RepositoryError(e)) => errors::internal("Failed to update car", &e),
    }
}
