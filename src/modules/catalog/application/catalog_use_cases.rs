use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    GetAvailableYearsUseCase, GetBrandsUseCase, GetModelsByBrandUseCase, GetModelsUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub get_brands: Arc<dyn GetBrandsUseCase + Send + Sync>,
    pub get_models: Arc<dyn GetModelsUseCase + Send + Sync>,
    pub get_models_by_brand: Arc<dyn GetModelsByBrandUseCase + Send + Sync>,
    pub get_available_years: Arc<dyn GetAvailableYearsUseCase + Send + Sync>,
}
