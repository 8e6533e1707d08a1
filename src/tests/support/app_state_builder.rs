use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, login_user::ILoginUserUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{
    GetAvailableYearsUseCase, GetBrandsUseCase, GetModelsByBrandUseCase, GetModelsUseCase,
};
use crate::modules::car::application::car_use_cases::CarUseCases;
use crate::modules::car::application::domain::entities::Car;
use crate::modules::car::application::domain::policies::UploadPolicy;
use crate::modules::car::application::ports::incoming::use_cases::{
    CreateCarError, CreateCarUseCase, DeleteCarError, DeleteCarUseCase, GetCarsError,
    GetCarsUseCase, GetSingleCarError, GetSingleCarUseCase, UpdateCarError,
    UpdateCarPhotoError, UpdateCarPhotoUseCase, UpdateCarUseCase,
};
use crate::modules::car::application::ports::outgoing::PhotoStorage;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    car: CarUseCases,
    catalog: CatalogUseCases,
    photo_storage: Arc<dyn PhotoStorage + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            car: CarUseCases {
                create: Arc::new(StubCarUseCase::<Car, _>::error(
                    CreateCarError::RepositoryError("not used in this test".into()),
                )),
                get_single: Arc::new(StubCarUseCase::<Car, _>::error(GetSingleCarError::NotFound)),
                get_list: Arc::new(StubCarUseCase::<Vec<Car>, GetCarsError>::success(vec![])),
                update: Arc::new(StubCarUseCase::<Car, _>::error(UpdateCarError::NotFound)),
                delete: Arc::new(StubCarUseCase::<(), _>::error(DeleteCarError::NotFound)),
                update_photo: Arc::new(StubCarUseCase::<Car, _>::error(
                    UpdateCarPhotoError::NotFound,
                )),
            },
            catalog: CatalogUseCases {
                get_brands: Arc::new(StubGetBrandsUseCase::success(vec![])),
                get_models: Arc::new(StubGetModelsUseCase::success(vec![])),
                get_models_by_brand: Arc::new(StubGetModelsByBrandUseCase::success(vec![])),
                get_available_years: Arc::new(StubGetAvailableYearsUseCase {
                    current_year: 2025,
                }),
            },
            photo_storage: Arc::new(RecordingPhotoStorage::default()),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_create_car(mut self, uc: impl CreateCarUseCase + Send + Sync + 'static) -> Self {
        self.car.create = Arc::new(uc);
        self
    }

    pub fn with_get_single_car(
        mut self,
        uc: impl GetSingleCarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.car.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_cars(mut self, uc: impl GetCarsUseCase + Send + Sync + 'static) -> Self {
        self.car.get_list = Arc::new(uc);
        self
    }

    pub fn with_update_car(mut self, uc: impl UpdateCarUseCase + Send + Sync + 'static) -> Self {
        self.car.update = Arc::new(uc);
        self
    }

    pub fn with_delete_car(mut self, uc: impl DeleteCarUseCase + Send + Sync + 'static) -> Self {
        self.car.delete = Arc::new(uc);
        self
    }

    pub fn with_update_car_photo(
        mut self,
        uc: impl UpdateCarPhotoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.car.update_photo = Arc::new(uc);
        self
    }

    pub fn with_get_brands(mut self, uc: impl GetBrandsUseCase + Send + Sync + 'static) -> Self {
        self.catalog.get_brands = Arc::new(uc);
        self
    }

    pub fn with_get_models(mut self, uc: impl GetModelsUseCase + Send + Sync + 'static) -> Self {
        self.catalog.get_models = Arc::new(uc);
        self
    }

    pub fn with_get_models_by_brand(
        mut self,
        uc: impl GetModelsByBrandUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.get_models_by_brand = Arc::new(uc);
        self
    }

    pub fn with_get_available_years(
        mut self,
        uc: impl GetAvailableYearsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.get_available_years = Arc::new(uc);
        self
    }

    pub fn with_photo_storage(mut self, storage: Arc<dyn PhotoStorage + Send + Sync>) -> Self {
        self.photo_storage = storage;
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_user_use_case: self.create_user,
            login_user_use_case: self.login_user,
            car: self.car,
            catalog: self.catalog,
            photo_storage: self.photo_storage,
            upload_policy: self.upload_policy,
        })
    }
}
