mod get_available_years_service;
mod get_brands_service;
mod get_models_by_brand_service;
mod get_models_service;

pub use get_available_years_service::GetAvailableYearsService;
pub use get_brands_service::GetBrandsService;
pub use get_models_by_brand_service::GetModelsByBrandService;
pub use get_models_service::GetModelsService;
