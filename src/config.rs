// src/config.rs
use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
pub const DEFAULT_UPLOAD_DIR: &str = "public/uploads/cars";
pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Read access to key/value settings. Blank values count as unset.
pub struct ConfigSource<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl<'a> ConfigSource<'a> {
    pub fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }

    pub fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or(ConfigError::Missing(key))
    }

    pub fn parsed_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(key) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin used when building public photo URLs.
    pub public_base_url: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordHasherConfig {
    Bcrypt {
        cost: u32,
    },
    Argon2 {
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_file_size: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password_hasher: PasswordHasherConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();
        Self::from_source(&ConfigSource::new(&lookup))
    }

    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let host = source
            .optional("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = source.parsed_or("PORT", DEFAULT_PORT)?;
        let public_base_url = source
            .optional("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://{}:{}", host, port))
            .trim_end_matches('/')
            .to_string();

        let database = DatabaseConfig {
            url: source.required("DATABASE_URL")?,
            max_connections: source.parsed_or("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
        };

        let upload = UploadConfig {
            dir: PathBuf::from(
                source
                    .optional("UPLOAD_DIR")
                    .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            max_file_size: source.parsed_or("MAX_FILE_SIZE", DEFAULT_MAX_FILE_SIZE)?,
        };
        if upload.max_file_size == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_FILE_SIZE",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                public_base_url,
            },
            database,
            jwt: JwtConfig::from_source(source)?,
            password_hasher: Self::password_hasher_from_source(source)?,
            upload,
        })
    }

    fn password_hasher_from_source(
        source: &ConfigSource<'_>,
    ) -> Result<PasswordHasherConfig, ConfigError> {
        let kind = source
            .optional("PASSWORD_HASHER")
            .unwrap_or_else(|| "bcrypt".to_string())
            .to_lowercase();

        match kind.as_str() {
            "bcrypt" => {
                let cost = source.parsed_or("SALT_ROUNDS", DEFAULT_BCRYPT_COST)?;
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        key: "SALT_ROUNDS",
                        reason: "must be between 4 and 31".to_string(),
                    });
                }
                Ok(PasswordHasherConfig::Bcrypt { cost })
            }
            "argon2" => Ok(PasswordHasherConfig::Argon2 {
                memory_kib: source.parsed_or("ARGON2_MEMORY_KIB", 4 * 1024)?,
                iterations: source.parsed_or("ARGON2_ITERATIONS", 3)?,
                parallelism: source.parsed_or("ARGON2_PARALLELISM", 1)?,
            }),
            other => Err(ConfigError::Invalid {
                key: "PASSWORD_HASHER",
                reason: format!("unsupported hasher '{}', expected bcrypt or argon2", other),
            }),
        }
    }
}
