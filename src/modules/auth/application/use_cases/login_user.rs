use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::OnceCell;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::Credentials;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Shared by unknown email and wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoginUserInfo {
    pub id: Uuid,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoginUserResponse {
    pub token: String,
    pub user: LoginUserInfo,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, credentials: Credentials) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    decoy_hash: Arc<OnceCell<String>>,
}

/// Verified against when the email is unknown so both misses cost one hash
/// verification.
const DECOY_PASSWORD: &str = "decoy-password-never-assigned";

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    async fn verify_against_decoy(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| self.password_hasher.hash_password(DECOY_PASSWORD))
            .await;

        if let Ok(hash) = decoy {
            let _ = self.password_hasher.verify_password(password, hash).await;
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, credentials: Credentials) -> Result<LoginUserResponse, LoginError> {
        // 1. Find user by (normalized) email
        let user = self
            .query
            .find_by_email(credentials.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        let Some(user) = user else {
            self.verify_against_decoy(credentials.password()).await;
            return Err(LoginError::InvalidCredentials);
        };

        // 2. Verify password
        let is_valid = self
            .password_hasher
            .verify_password(credentials.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3. Issue access token
        let token = self
            .token_provider
            .generate_access_token(user.id, &user.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            token,
            user: LoginUserInfo {
                id: user.id,
                email: user.email,
            },
        })
    }
}
