pub mod brands;
pub mod models;
