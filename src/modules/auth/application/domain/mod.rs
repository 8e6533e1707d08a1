pub mod entities;

pub use entities::{Credentials, CredentialsError, User};
