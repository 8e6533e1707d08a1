use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenProvider};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_JWT_ISSUER: &str = "car-inventory-test";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: TEST_JWT_ISSUER.to_string(),
        expiration_seconds: 3600,
    }
}

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Shape the `AuthenticatedUser` extractor looks up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

/// Ready-to-use `Authorization` header value.
pub fn bearer_token(user_id: Uuid, email: &str) -> String {
    let token = create_test_jwt_service()
        .generate_access_token(user_id, email)
        .expect("test token should encode");
    format!("Bearer {}", token)
}

pub fn expired_bearer_token(user_id: Uuid) -> String {
    let issued = Utc::now() - Duration::hours(2);
    let claims = TokenClaims {
        sub: user_id,
        email: "expired@mail.com".to_string(),
        iss: TEST_JWT_ISSUER.to_string(),
        iat: issued.timestamp(),
        nbf: issued.timestamp(),
        exp: (issued + Duration::hours(1)).timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("expired test token should encode");
    format!("Bearer {}", token)
}
