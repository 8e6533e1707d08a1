pub mod app_state_builder;
pub mod auth_helper;
pub mod car_fixtures;
pub mod catalog_fixtures;
pub mod multipart;
pub mod stubs;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
