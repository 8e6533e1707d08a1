use actix_web::{delete, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::car::adapter::incoming::web::errors;
use crate::modules::car::application::ports::incoming::use_cases::DeleteCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete a car
///
/// Marks the car as deleted; it disappears from reads and listings.
/// Deleting an already deleted car answers 404.
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = "cars",
    params(("id" = String, Path, description = "Car UUID")),
    responses(
        (status = 200, description = "Car deleted", body = inline(SuccessResponse<Option<String>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No active car with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/cars/{id}")]
pub async fn delete_car_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.delete.execute(&car_id).await {
        Ok(()) => {
            info!(car_id = %car_id, user_id = %user.user_id, "Car soft-deleted");
            ApiResponse::success(
                &format!("Carro con id {} eliminado exitosamente.", car_id),
                None::<()>,
            )
        }
        Err(DeleteCarError::InvalidId(raw)) => errors::invalid_id(&raw),
        Err(DeleteCarError::NotFound) => errors::car_not_found(&car_id),
        Err(DeleteCarError::RepositoryError(e)) => errors::internal("Failed to delete car", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use uuid::Uuid;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, test_token_provider};
    use crate::tests::support::stubs::StubCarUseCase;

    async fn delete(
        state: web::Data<AppState>,
        id: &str,
        authorization: Option<String>,
    ) -> (u16, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_car_handler),
        )
        .await;

        let mut req = test::TestRequest::delete().uri(&format!("/api/cars/{}", id));
        if let Some(header) = authorization {
            req = req.insert_header(("Authorization", header));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn deletes_car_and_returns_null_data() {
        let id = Uuid::new_v4().to_string();
        let state = TestAppStateBuilder::default()
            .with_delete_car(StubCarUseCase::<(), DeleteCarError>::success(()))
            .build();

        let (status, body) = delete(state, &id, Some(bearer_token(Uuid::new_v4(), "a@b.com"))).await;

        assert_eq!(status, 200);
        assert_eq!(body["message"], format!("Carro con id {} eliminado exitosamente.", id));
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn already_deleted_car_is_not_found() {
        let id = Uuid::new_v4().to_string();
        let state = TestAppStateBuilder::default()
            .with_delete_car(StubCarUseCase::<(), _>::error(DeleteCarError::NotFound))
            .build();

        let (status, _) = delete(state, &id, Some(bearer_token(Uuid::new_v4(), "a@b.com"))).await;

        assert_eq!(status, 404);
    }

    #[actix_web::test]
    async fn requires_token() {
        let state = TestAppStateBuilder::default()
            .with_delete_car(StubCarUseCase::<(), DeleteCarError>::success(()))
            .build();

        let (status, body) = delete(state, &Uuid::new_v4().to_string(), None).await;

        assert_eq!(status, 401);
        assert_eq!(body["message"], "Token not provided");
    }

    #[actix_web::test]
    async fn malformed_token_is_rejected() {
        let state = TestAppStateBuilder::default().build();

        let (status, body) = delete(
            state,
            &Uuid::new_v4().to_string(),
            Some("Bearer not.a.jwt".to_string()),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["message"], "Invalid token");
    }
}
