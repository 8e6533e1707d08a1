pub mod car_archiver;
pub mod car_query;
pub mod car_repository;
pub mod photo_storage;

pub use car_archiver::{CarArchiver, CarArchiverError};
pub use car_query::{CarListFilter, CarQuery, CarQueryError};
pub use car_repository::{CarRepository, CarRepositoryError};
pub use photo_storage::{PhotoStorage, PhotoStorageError};
