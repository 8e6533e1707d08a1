use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::domain::entities::Brand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List brands
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = "catalog",
    responses(
        (status = 200, description = "Brands ordered by name", body = inline(SuccessResponse<Vec<Brand>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/brands")]
pub async fn get_brands_handler(_user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.catalog.get_brands.execute().await {
        Ok(brands) => ApiResponse::success("Brands retrieved successfully", brands),
        Err(e) => {
            error!(error = %e, "Failed to list brands");
            ApiResponse::internal_error()
        }
    }
}
