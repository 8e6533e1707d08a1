pub mod brand_query;
pub mod car_model_query;

pub use brand_query::{BrandQuery, BrandQueryError};
pub use car_model_query::{CarModelQuery, CarModelQueryError};
