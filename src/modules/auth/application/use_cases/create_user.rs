use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Credentials, User};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("User with email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, credentials: Credentials) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, credentials: Credentials) -> Result<User, CreateUserError> {
        let email = credentials.email().to_string();

        // 1. Reject a taken email before touching the hasher or the table
        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::EmailAlreadyExists(email));
        }

        // 2. Hash password
        let password_hash = self
            .password_hasher
            .hash_password(credentials.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // 3. Persist
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        match self.repository.create_user(user).await {
            Ok(user) => Ok(user),
            // a concurrent registration won the race after the pre-check
            Err(UserRepositoryError::EmailAlreadyExists) => {
                Err(CreateUserError::EmailAlreadyExists(email))
            }
            Err(UserRepositoryError::DatabaseError(e)) => Err(CreateUserError::RepositoryError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{HashError, UserQueryError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[derive(Default, Clone)]
    struct MockUserQuery {
        existing: Option<User>,
        fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
            if self.fail {
                return Err(UserQueryError::DatabaseError("connection lost".into()));
            }
            Ok(self.existing.clone().filter(|u| u.email == email))
        }
    }

    #[derive(Clone)]
    struct MockUserRepository {
        result: Option<UserRepositoryError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockUserRepository {
        fn success() -> Self {
            Self {
                result: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn error(err: UserRepositoryError) -> Self {
            Self {
                result: Some(err),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Some(err) => Err(err.clone()),
                None => Ok(user),
            }
        }
    }

    struct StubHasher {
        fail: bool,
    }

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            if self.fail {
                return Err(HashError::HashFailed);
            }
            Ok(format!("hashed:{}", password))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!("not used in create user tests")
        }
    }

    fn creds(email: &str) -> Credentials {
        Credentials::new(email.to_string(), "secret123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn creates_user_with_hashed_password_and_normalized_email() {
        let use_case = CreateUserUseCase::new(
            MockUserQuery::default(),
            MockUserRepository::success(),
            Arc::new(StubHasher { fail: false }),
        );

        let user = use_case.execute(creds("  New@Mail.com")).await.unwrap();

        assert_eq!(user.email, "new@mail.com");
        assert_eq!(user.password_hash, "hashed:secret123");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn rejects_existing_email_before_any_write() {
        let repo = MockUserRepository::success();
        let use_case = CreateUserUseCase::new(
            MockUserQuery {
                existing: Some(sample_user("taken@mail.com")),
                fail: false,
            },
            repo.clone(),
            Arc::new(StubHasher { fail: false }),
        );

        let result = use_case.execute(creds("Taken@mail.com")).await;

        assert_eq!(
            result,
            Err(CreateUserError::EmailAlreadyExists("taken@mail.com".into()))
        );
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unique_violation_from_storage_maps_to_same_error() {
        let use_case = CreateUserUseCase::new(
            MockUserQuery::default(),
            MockUserRepository::error(UserRepositoryError::EmailAlreadyExists),
            Arc::new(StubHasher { fail: false }),
        );

        let result = use_case.execute(creds("race@mail.com")).await;

        assert_eq!(
            result,
            Err(CreateUserError::EmailAlreadyExists("race@mail.com".into()))
        );
    }

    #[tokio::test]
    async fn hashing_failure_is_reported() {
        let use_case = CreateUserUseCase::new(
            MockUserQuery::default(),
            MockUserRepository::success(),
            Arc::new(StubHasher { fail: true }),
        );

        let result = use_case.execute(creds("a@mail.com")).await;
        assert!(matches!(result, Err(CreateUserError::HashingFailed(_))));
    }

    #[tokio::test]
    async fn query_and_repository_failures_are_repository_errors() {
        let failing_query = CreateUserUseCase::new(
            MockUserQuery {
                existing: None,
                fail: true,
            },
            MockUserRepository::success(),
            Arc::new(StubHasher { fail: false }),
        );
        assert!(matches!(
            failing_query.execute(creds("a@mail.com")).await,
            Err(CreateUserError::RepositoryError(_))
        ));

        let failing_repo = CreateUserUseCase::new(
            MockUserQuery::default(),
            MockUserRepository::error(UserRepositoryError::DatabaseError("boom".into())),
            Arc::new(StubHasher { fail: false }),
        );
        assert_eq!(
            failing_repo.execute(creds("a@mail.com")).await,
            Err(CreateUserError::RepositoryError("boom".into()))
        );
    }
}
