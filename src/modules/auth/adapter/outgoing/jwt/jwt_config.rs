use crate::config::{ConfigError, ConfigSource};

pub const DEFAULT_JWT_EXPIRATION: i64 = 86400;
pub const DEFAULT_JWT_ISSUER: &str = "car-inventory";
pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub expiration_seconds: i64,
}

impl JwtConfig {
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let secret_key = source.required("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LENGTH),
            });
        }

        let expiration_seconds = source.parsed_or("JWT_EXPIRATION", DEFAULT_JWT_EXPIRATION)?;
        if expiration_seconds <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        let issuer = source
            .optional("JWT_ISSUER")
            .unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            expiration_seconds,
        })
    }
}
