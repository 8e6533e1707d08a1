use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::domain::entities::CarModel;
use crate::catalog::application::ports::incoming::use_cases::GetModelsByBrandError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the models of one brand
///
/// An unknown brand yields an empty list.
#[utoipa::path(
    get,
    path = "/api/models/brand/{brandId}",
    tag = "catalog",
    params(("brandId" = String, Path, description = "Brand UUID")),
    responses(
        (status = 200, description = "Models of the brand ordered by name", body = inline(SuccessResponse<Vec<CarModel>>)),
        (status = 400, description = "Malformed brand id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/models/brand/{brand_id}")]
pub async fn get_models_by_brand_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match data.catalog.get_models_by_brand.execute(&brand_id).await {
        Ok(models) => ApiResponse::success("Models retrieved successfully", models),
        Err(GetModelsByBrandError::InvalidId(raw)) => {
            ApiResponse::bad_request(&format!("The ID '{}' is not a valid UUID", raw))
        }
        Err(GetModelsByBrandError::QueryFailed(e)) => {
            error!(error = %e, brand_id = %brand_id, "Failed to list models of brand");
            ApiResponse::internal_error()
        }
    }
}
