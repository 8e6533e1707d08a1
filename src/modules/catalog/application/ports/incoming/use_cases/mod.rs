mod get_available_years;
mod get_brands;
mod get_models;
mod get_models_by_brand;

pub use get_available_years::GetAvailableYearsUseCase;
pub use get_brands::{GetBrandsError, GetBrandsUseCase};
pub use get_models::{GetModelsError, GetModelsUseCase};
pub use get_models_by_brand::{GetModelsByBrandError, GetModelsByBrandUseCase};
