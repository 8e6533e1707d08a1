mod brand_query_postgres;
mod car_model_query_postgres;
pub mod sea_orm_entity;

pub use brand_query_postgres::BrandQueryPostgres;
pub use car_model_query_postgres::CarModelQueryPostgres;
