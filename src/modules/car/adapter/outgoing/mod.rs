mod car_archiver_postgres;
mod car_model_mapper;
mod car_query_postgres;
mod car_repository_postgres;
mod photo_storage_local;
pub mod sea_orm_entity;

pub use car_archiver_postgres::CarArchiverPostgres;
pub use car_query_postgres::CarQueryPostgres;
pub use car_repository_postgres::CarRepositoryPostgres;
pub use photo_storage_local::{LocalPhotoStorage, PUBLIC_PHOTO_PATH};
