use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::domain::entities::YearRange;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Model years offered for new listings
#[utoipa::path(
    get,
    path = "/api/years",
    tag = "catalog",
    responses(
        (status = 200, description = "Years from the current one down to 1990", body = inline(SuccessResponse<YearRange>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/years")]
pub async fn get_available_years_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let range = data.catalog.get_available_years.execute().await;
    ApiResponse::success("Available years retrieved successfully", range)
}
