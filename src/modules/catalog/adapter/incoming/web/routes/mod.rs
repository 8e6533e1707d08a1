mod get_available_years;
mod get_brands;
mod get_models;
mod get_models_by_brand;

pub use get_available_years::*;
pub use get_brands::*;
pub use get_models::*;
pub use get_models_by_brand::*;
