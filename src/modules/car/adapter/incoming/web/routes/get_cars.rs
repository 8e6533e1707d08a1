use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::car::adapter::incoming::web::errors;
use crate::modules::car::application::domain::entities::{
    validate_anio, validate_marca, validate_modelo, validate_precio, Car, CarValidationError,
};
use crate::modules::car::application::ports::outgoing::CarListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CarListQuery {
    /// Substring match, case-sensitive
    pub marca: Option<String>,
    /// Substring match, case-sensitive
    pub modelo: Option<String>,
    /// Substring match, case-sensitive
    pub color: Option<String>,
    /// Exact model year
    pub anio: Option<i32>,
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
    /// One-based page number, defaults to 1
    pub page: Option<u64>,
    /// Page size, defaults to 10
    pub limit: Option<u64>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl CarListQuery {
    /// Applies the same field rules as car creation to every supplied filter.
    pub fn into_criteria(self) -> Result<(CarListFilter, PageRequest), String> {
        let invalid = |e: CarValidationError| e.to_string();

        let filter = CarListFilter {
            marca: blank_to_none(self.marca)
                .map(|m| validate_marca(&m))
                .transpose()
                .map_err(invalid)?,
            modelo: blank_to_none(self.modelo)
                .map(|m| validate_modelo(&m))
                .transpose()
                .map_err(invalid)?,
            color: blank_to_none(self.color),
            anio: self.anio.map(validate_anio).transpose().map_err(invalid)?,
            precio_min: self.precio_min.map(validate_precio).transpose().map_err(invalid)?,
            precio_max: self.precio_max.map(validate_precio).transpose().map_err(invalid)?,
        };

        let page = PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .map_err(|e| e.to_string())?;

        Ok((filter, page))
    }
}

/// List cars
///
/// Public. Returns active cars, newest first, filtered by any combination
/// of the query parameters.
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = "cars",
    params(CarListQuery),
    responses(
        (status = 200, description = "Page of cars", body = inline(SuccessResponse<PageResult<Car>>)),
        (status = 400, description = "Invalid filter or pagination value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/cars")]
pub async fn get_cars_handler(
    query: web::Query<CarListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = match query.into_inner().into_criteria() {
        Ok(criteria) => criteria,
        Err(message) => return ApiResponse::bad_request(&message),
    };

    match data.car.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success("Carros obtenidos exitosamente.", result),
        Err(e) => errors::internal("Failed to list cars", &e.to_string()),
    }
}
