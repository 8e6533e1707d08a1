pub mod auth;
pub mod car;
pub mod catalog;
