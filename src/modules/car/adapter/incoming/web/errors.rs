// Responses shared by the car handlers for conditions every id-taking
// route can hit.

use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;

pub fn invalid_id(raw: &str) -> HttpResponse {
    ApiResponse::bad_request(&format!("The ID '{}' is not a valid UUID", raw))
}

pub fn car_not_found(id: &str) -> HttpResponse {
    ApiResponse::not_found(&format!("Car with ID {} not found", id))
}

pub fn internal(context: &str, detail: &str) -> HttpResponse {
    error!(error = %detail, "{}", context);
    ApiResponse::internal_error()
}
