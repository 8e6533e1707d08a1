pub mod json_config;
pub mod request_logger;
pub mod response;

pub use json_config::{custom_json_config, custom_query_config};
pub use request_logger::log_request;
pub use response::{ApiError, ApiResponse};
