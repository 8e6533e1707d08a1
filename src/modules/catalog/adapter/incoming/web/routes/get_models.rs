use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::domain::entities::CarModel;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List every model
#[utoipa::path(
    get,
    path = "/api/models",
    tag = "catalog",
    responses(
        (status = 200, description = "Models ordered by name", body = inline(SuccessResponse<Vec<CarModel>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/models")]
pub async fn get_models_handler(_user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.catalog.get_models.execute().await {
        Ok(models) => ApiResponse::success("Models retrieved successfully", models),
        Err(e) => {
            error!(error = %e, "Failed to list models");
            ApiResponse::internal_error()
        }
    }
}
