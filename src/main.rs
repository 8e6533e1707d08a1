pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::car;
pub use modules::catalog;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
};

use crate::car::adapter::outgoing::{
    CarArchiverPostgres, CarQueryPostgres, CarRepositoryPostgres, LocalPhotoStorage,
    PUBLIC_PHOTO_PATH,
};
use crate::car::adapter::incoming::web::upload::multipart_config;
use crate::car::application::car_use_cases::CarUseCases;
use crate::car::application::domain::policies::UploadPolicy;
use crate::car::application::ports::outgoing::PhotoStorage;
use crate::car::application::service::{
    CreateCarService, DeleteCarService, GetCarsService, GetSingleCarService,
    UpdateCarPhotoService, UpdateCarService,
};

use crate::catalog::adapter::outgoing::{BrandQueryPostgres, CarModelQueryPostgres};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::service::{
    GetAvailableYearsService, GetBrandsService, GetModelsByBrandService, GetModelsService,
};

use crate::config::{AppConfig, PasswordHasherConfig};
use crate::shared::api::{custom_json_config, custom_query_config, log_request};

use actix_files::Files;
use actix_web::{middleware::from_fn, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub car: CarUseCases,
    pub catalog: CatalogUseCases,
    pub photo_storage: Arc<dyn PhotoStorage + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

fn build_password_hasher(
    config: &PasswordHasherConfig,
) -> Result<Arc<dyn PasswordHasher + Send + Sync>, String> {
    match *config {
        PasswordHasherConfig::Bcrypt { cost } => Ok(Arc::new(BcryptHasher::new(cost))),
        PasswordHasherConfig::Argon2 {
            memory_kib,
            iterations,
            parallelism,
        } => Argon2Hasher::with_params(memory_kib, iterations, parallelism)
            .map(|h| Arc::new(h) as Arc<dyn PasswordHasher + Send + Sync>)
            .map_err(|e| format!("invalid ARGON2_* parameters: {e}")),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;
    Migrator::up(&conn, None).await.map_err(|e| {
        error!(error = %e, "Failed to run migrations");
        std::io::Error::other(e.to_string())
    })?;
    let db_arc = Arc::new(conn);
    info!("Database ready");

    // Auth
    let password_hasher = build_password_hasher(&config.password_hasher).map_err(|e| {
        error!(error = %e, "Invalid password hasher configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let create_user_use_case =
        CreateUserUseCase::new(user_query.clone(), user_repo, Arc::clone(&password_hasher));
    let login_user_use_case =
        LoginUserUseCase::new(user_query, password_hasher, Arc::clone(&token_provider));

    // Cars
    tokio::fs::create_dir_all(&config.upload.dir).await?;
    let photo_storage: Arc<dyn PhotoStorage + Send + Sync> = Arc::new(LocalPhotoStorage::new(
        config.upload.dir.clone(),
        &config.server.public_base_url,
    ));

    let car_query = CarQueryPostgres::new(Arc::clone(&db_arc));
    let car_repo = CarRepositoryPostgres::new(Arc::clone(&db_arc));
    let car_archiver = CarArchiverPostgres::new(Arc::clone(&db_arc));

    let car = CarUseCases {
        create: Arc::new(CreateCarService::new(car_repo.clone())),
        get_single: Arc::new(GetSingleCarService::new(car_query.clone())),
        get_list: Arc::new(GetCarsService::new(car_query.clone())),
        update: Arc::new(UpdateCarService::new(car_repo.clone())),
        delete: Arc::new(DeleteCarService::new(car_archiver)),
        update_photo: Arc::new(UpdateCarPhotoService::new(
            car_query,
            car_repo,
            Arc::clone(&photo_storage),
        )),
    };

    // Catalog
    let brand_query = BrandQueryPostgres::new(Arc::clone(&db_arc));
    let model_query = CarModelQueryPostgres::new(Arc::clone(&db_arc));
    let catalog = CatalogUseCases {
        get_brands: Arc::new(GetBrandsService::new(brand_query)),
        get_models: Arc::new(GetModelsService::new(model_query.clone())),
        get_models_by_brand: Arc::new(GetModelsByBrandService::new(model_query)),
        get_available_years: Arc::new(GetAvailableYearsService::new()),
    };

    let state = AppState {
        create_user_use_case: Arc::new(create_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        car,
        catalog,
        photo_storage,
        upload_policy: UploadPolicy::new(config.upload.max_file_size),
    };

    let server_url = config.server.bind_address();
    let upload_dir = config.upload.dir.clone();
    let max_file_size = config.upload.max_file_size;
    let openapi = ApiDoc::openapi();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log_request))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(multipart_config(max_file_size))
            .configure(init_routes)
            .service(Files::new(PUBLIC_PHOTO_PATH, upload_dir.clone()))
            .service(
                SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Cars
    cfg.service(crate::car::adapter::incoming::web::routes::create_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::get_cars_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::get_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::update_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::delete_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::update_car_photo_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_brands_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_models_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_models_by_brand_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_available_years_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

#[cfg(test)]
mod hasher_selection_tests {
    use super::*;

    #[test]
    fn bcrypt_and_argon2_configs_build_hashers() {
        assert!(build_password_hasher(&PasswordHasherConfig::Bcrypt { cost: 4 }).is_ok());
        assert!(build_password_hasher(&PasswordHasherConfig::Argon2 {
            memory_kib: 4096,
            iterations: 3,
            parallelism: 1,
        })
        .is_ok());
    }

    #[test]
    fn impossible_argon2_params_are_rejected() {
        let err = build_password_hasher(&PasswordHasherConfig::Argon2 {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        })
        .err()
        .unwrap();

        assert!(err.starts_with("invalid ARGON2_* parameters"));
    }
}
