use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ========================= Credentials =========================
/// Email + password pair shared by registration and login.
/// The email is stored normalized (trimmed, lowercase).
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Result<Self, CredentialsError> {
        let email = Self::normalize_email(&email)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CredentialsError::PasswordTooShort);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn normalize_email(email: &str) -> Result<String, CredentialsError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(CredentialsError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(CredentialsError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }
}
