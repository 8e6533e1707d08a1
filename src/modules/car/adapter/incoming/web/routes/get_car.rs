use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::car::adapter::incoming::web::errors;
use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::ports::incoming::use_cases::GetSingleCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a car by id
///
/// Public. Soft-deleted cars are reported as not found.
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = "cars",
    params(("id" = String, Path, description = "Car UUID")),
    responses(
        (status = 200, description = "Car found", body = inline(SuccessResponse<Car>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No active car with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/cars/{id}")]
pub async fn get_car_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.get_single.execute(&car_id).await {
        Ok(car) => ApiResponse::success("Carro encontrado exitosamente.", car),
        Err(GetSingleCarError::InvalidId(raw)) => errors::invalid_id(&raw),
        Err(GetSingleCarError::NotFound) => errors::car_not_found(&car_id),
        Err(GetSingleCarError::RepositoryError(e)) => errors::internal("Failed to fetch car", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::car_fixtures::sample_car;
    use crate::tests::support::stubs::StubCarUseCase;

    async fn get(state: web::Data<AppState>, id: &str) -> (u16, serde_json::Value) {
        let app = test::init_service(App::new().app_data(state).service(get_car_handler)).await;
        let req = test::TestRequest::get()
            .uri(&format!("/api/cars/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_active_car_without_token() {
        let car = sample_car();
        let id = car.id.to_string();
        let state = TestAppStateBuilder::default()
            .with_get_single_car(StubCarUseCase::<Car, GetSingleCarError>::success(car))
            .build();

        let (status, body) = get(state, &id).await;

        assert_eq!(status, 200);
        assert_eq!(body["message"], "Carro encontrado exitosamente.");
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["año"], 2023);
    }

    #[actix_web::test]
    async fn unknown_or_deleted_car_is_not_found() {
        let id = uuid::Uuid::new_v4().to_string();
        let state = TestAppStateBuilder::default()
            .with_get_single_car(StubCarUseCase::<Car, _>::error(GetSingleCarError::NotFound))
            .build();

        let (status, body) = get(state, &id).await;

        assert_eq!(status, 404);
        assert_eq!(body["message"], format!("Car with ID {} not found", id));
        assert_eq!(body["customMessage"], "No se pudo encontrar el recurso solicitado.");
    }

    #[actix_web::test]
    async fn malformed_id_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_get_single_car(StubCarUseCase::<Car, _>::error(GetSingleCarError::InvalidId(
                "abc".into(),
            )))
            .build();

        let (status, body) = get(state, "abc").await;

        assert_eq!(status, 400);
        assert_eq!(body["message"], "The ID 'abc' is not a valid UUID");
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_get_single_car(StubCarUseCase::<Car, _>::error(
                GetSingleCarError::RepositoryError("connection reset".into()),
            ))
            .build();

        let (status, body) = get(state, &uuid::Uuid::new_v4().to_string()).await;

        assert_eq!(status, 500);
        assert_eq!(body["name"], "Internal Server Error");
    }
}
