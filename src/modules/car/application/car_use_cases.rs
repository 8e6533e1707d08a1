use std::sync::Arc;

use crate::modules::car::application::ports::incoming::use_cases::{
    CreateCarUseCase, DeleteCarUseCase, GetCarsUseCase, GetSingleCarUseCase,
    UpdateCarPhotoUseCase, UpdateCarUseCase,
};

#[derive(Clone)]
pub struct CarUseCases {
    pub create: Arc<dyn CreateCarUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCarUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCarsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCarUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCarUseCase + Send + Sync>,
    pub update_photo: Arc<dyn UpdateCarPhotoUseCase + Send + Sync>,
}
