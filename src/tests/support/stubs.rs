use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::application::domain::entities::{Credentials, User};
use crate::auth::application::use_cases::create_user::{CreateUserError, ICreateUserUseCase};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginUserResponse,
};
use crate::catalog::application::domain::entities::{Brand, CarModel, YearRange};
use crate::catalog::application::ports::incoming::use_cases::{
    GetAvailableYearsUseCase, GetBrandsError, GetBrandsUseCase, GetModelsByBrandError,
    GetModelsByBrandUseCase, GetModelsError, GetModelsUseCase,
};
use crate::modules::car::application::domain::entities::{Car, CarPatch, NewCar};
use crate::modules::car::application::ports::incoming::use_cases::{
    CreateCarError, CreateCarUseCase, DeleteCarError, DeleteCarUseCase, GetCarsError,
    GetCarsUseCase, GetSingleCarError, GetSingleCarUseCase, UpdateCarError,
    UpdateCarPhotoError, UpdateCarPhotoUseCase, UpdateCarUseCase,
};
use crate::modules::car::application::ports::outgoing::{
    CarListFilter, PhotoStorage, PhotoStorageError,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ========================================================================
// Auth
// ========================================================================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _credentials: Credentials) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _credentials: Credentials) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

// ========================================================================
// Car
// ========================================================================

/// Answers every car use case with the same canned result.
#[derive(Clone)]
pub struct StubCarUseCase<T, E> {
    result: Result<T, E>,
}

impl<T, E> StubCarUseCase<T, E> {
    pub fn success(value: T) -> Self {
        Self { result: Ok(value) }
    }

    pub fn error(err: E) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreateCarUseCase for StubCarUseCase<Car, CreateCarError> {
    async fn execute(&self, car: NewCar) -> Result<Car, CreateCarError> {
        // Echo the photo reference so handlers can be checked end to end
        self.result.clone().map(|stored| Car {
            fotografia: car.fotografia,
            ..stored
        })
    }
}

#[async_trait]
impl GetSingleCarUseCase for StubCarUseCase<Car, GetSingleCarError> {
    async fn execute(&self, _car_id: &str) -> Result<Car, GetSingleCarError> {
        self.result.clone()
    }
}

#[async_trait]
impl GetCarsUseCase for StubCarUseCase<Vec<Car>, GetCarsError> {
    async fn execute(
        &self,
        _filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Car>, GetCarsError> {
        let items = self.result.clone()?;
        let total = items.len() as u64;
        Ok(PageResult::new(items, page, total))
    }
}

#[async_trait]
impl UpdateCarUseCase for StubCarUseCase<Car, UpdateCarError> {
    async fn execute(&self, _car_id: &str, _patch: CarPatch) -> Result<Car, UpdateCarError> {
        self.result.clone()
    }
}

#[async_trait]
impl DeleteCarUseCase for StubCarUseCase<(), DeleteCarError> {
    async fn execute(&self, _car_id: &str) -> Result<(), DeleteCarError> {
        self.result.clone()
    }
}

#[async_trait]
impl UpdateCarPhotoUseCase for StubCarUseCase<Car, UpdateCarPhotoError> {
    async fn execute(&self, _car_id: &str, fotografia: String) -> Result<Car, UpdateCarPhotoError> {
        self.result.clone().map(|car| Car {
            fotografia: Some(fotografia),
            ..car
        })
    }
}

/// Keeps every stored and removed URL so tests can assert on cleanup.
#[derive(Clone, Default)]
pub struct RecordingPhotoStorage {
    pub stored: Arc<Mutex<Vec<String>>>,
    pub removed: Arc<Mutex<Vec<String>>>,
}

impl RecordingPhotoStorage {
    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoStorage for RecordingPhotoStorage {
    async fn store(&self, _source: &Path, extension: &str) -> Result<String, PhotoStorageError> {
        let mut stored = self.stored.lock().unwrap();
        let url = format!(
            "http://localhost:3000/uploads/cars/car-test-{}{}",
            stored.len(),
            extension
        );
        stored.push(url.clone());
        Ok(url)
    }

    async fn remove(&self, url: &str) -> Result<(), PhotoStorageError> {
        self.removed.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// ========================================================================
// Catalog
// ========================================================================

#[derive(Clone)]
pub struct StubGetBrandsUseCase {
    result: Result<Vec<Brand>, GetBrandsError>,
}

impl StubGetBrandsUseCase {
    pub fn success(brands: Vec<Brand>) -> Self {
        Self { result: Ok(brands) }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetBrandsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetBrandsUseCase for StubGetBrandsUseCase {
    async fn execute(&self) -> Result<Vec<Brand>, GetBrandsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetModelsUseCase {
    result: Result<Vec<CarModel>, GetModelsError>,
}

impl StubGetModelsUseCase {
    pub fn success(models: Vec<CarModel>) -> Self {
        Self { result: Ok(models) }
    }
}

#[async_trait]
impl GetModelsUseCase for StubGetModelsUseCase {
    async fn execute(&self) -> Result<Vec<CarModel>, GetModelsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetModelsByBrandUseCase {
    result: Result<Vec<CarModel>, GetModelsByBrandError>,
}

impl StubGetModelsByBrandUseCase {
    pub fn success(models: Vec<CarModel>) -> Self {
        Self { result: Ok(models) }
    }

    pub fn error(err: GetModelsByBrandError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetModelsByBrandUseCase for StubGetModelsByBrandUseCase {
    async fn execute(&self, _brand_id: &str) -> Result<Vec<CarModel>, GetModelsByBrandError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetAvailableYearsUseCase {
    pub current_year: i32,
}

#[async_trait]
impl GetAvailableYearsUseCase for StubGetAvailableYearsUseCase {
    async fn execute(&self) -> YearRange {
        YearRange::up_to(self.current_year)
    }
}
