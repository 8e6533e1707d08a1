use crate::api::schemas::{CarForm, CarPhotoForm, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Users
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, RegisteredUser,
};
use crate::auth::application::use_cases::login_user::{LoginUserInfo, LoginUserResponse};

// Cars
use crate::car::application::domain::entities::{Car, CarPatch};

// Catalog
use crate::catalog::application::domain::entities::{Brand, CarModel, YearRange};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Inventory API",
        version = "1.0.0",
        description = "Car listings with photos, brand and model catalogs, and user accounts"
    ),
    paths(
        // User endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Car endpoints
        crate::car::adapter::incoming::web::routes::create_car_handler,
        crate::car::adapter::incoming::web::routes::get_cars_handler,
        crate::car::adapter::incoming::web::routes::get_car_handler,
        crate::car::adapter::incoming::web::routes::update_car_handler,
        crate::car::adapter::incoming::web::routes::delete_car_handler,
        crate::car::adapter::incoming::web::routes::update_car_photo_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::get_brands_handler,
        crate::catalog::adapter::incoming::web::routes::get_models_handler,
        crate::catalog::adapter::incoming::web::routes::get_models_by_brand_handler,
        crate::catalog::adapter::incoming::web::routes::get_available_years_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // User DTOs
            CreateUserRequest,
            RegisteredUser,
            LoginRequestDto,
            LoginUserResponse,
            LoginUserInfo,

            // Car DTOs
            Car,
            CarPatch,
            CarForm,
            CarPhotoForm,

            // Catalog DTOs
            Brand,
            CarModel,
            YearRange
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Account registration and login"),
        (name = "cars", description = "Car listings"),
        (name = "catalog", description = "Brands, models and model years"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/users/login"))
                        .build(),
                ),
            )
        }
    }
}
