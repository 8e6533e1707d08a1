use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::{Credentials, User};
use crate::auth::application::use_cases::create_user::CreateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Registration request from client
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "secret123")]
    pub password: String,
}

/// Public view of a user; the password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: Uuid,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisteredUser>)),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let credentials = match Credentials::new(dto.email, dto.password) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.create_user_use_case.execute(credentials).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created("User created successfully.", RegisteredUser::from(user))
        }

        Err(CreateUserError::EmailAlreadyExists(email)) => {
            warn!(email = %email, "Registration rejected: email already in use");
            ApiResponse::bad_request(&format!("User with email {} already exists", email))
        }

        Err(e) => {
            error!(error = %e, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;

    use crate::auth::application::use_cases::create_user::ICreateUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockCreateUser {
        result: Result<(), CreateUserError>,
    }

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUser {
        async fn execute(&self, credentials: Credentials) -> Result<User, CreateUserError> {
            self.result.clone()?;
            let now = Utc::now();
            Ok(User {
                id: Uuid::new_v4(),
                email: credentials.email().to_string(),
                password_hash: "$2b$10$secret".to_string(),
                created_at: now,
                updated_at: now,
            })
        }
    }

    async fn post_user(
        uc: MockCreateUser,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_create_user(uc).build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn creates_user_without_exposing_hash() {
        let (status, body) = post_user(
            MockCreateUser { result: Ok(()) },
            serde_json::json!({"email": " Jane@Example.com ", "password": "secret123"}),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["message"], "User created successfully.");
        assert_eq!(body["data"]["email"], "jane@example.com");
        assert!(body["data"]["createdAt"].is_string());
        assert!(body["data"].get("passwordHash").is_none());
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn short_password_is_bad_request() {
        let (status, body) = post_user(
            MockCreateUser { result: Ok(()) },
            serde_json::json!({"email": "jane@example.com", "password": "123"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["message"], "Password must be at least 6 characters long");
    }

    #[actix_web::test]
    async fn duplicate_email_is_bad_request() {
        let (status, body) = post_user(
            MockCreateUser {
                result: Err(CreateUserError::EmailAlreadyExists("jane@example.com".into())),
            },
            serde_json::json!({"email": "jane@example.com", "password": "secret123"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["name"], "Bad Request");
    }

    #[actix_web::test]
    async fn repository_failure_is_generic_500() {
        let (status, body) = post_user(
            MockCreateUser {
                result: Err(CreateUserError::RepositoryError("pool timed out".into())),
            },
            serde_json::json!({"email": "jane@example.com", "password": "secret123"}),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["message"], "Ocurrió un error inesperado en el servidor.");
    }
}
