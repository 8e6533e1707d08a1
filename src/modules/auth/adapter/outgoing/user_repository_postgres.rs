use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;
use super::user_query_postgres::map_user_model;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(map_user_model(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn new_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "new@mail.com".into(),
            password_hash: "hashed".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_user_returns_inserted_row() {
        let user = new_user();
        let row = UserModel {
            id: user.id,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_user(user.clone()).await.unwrap();

        assert_eq!(created.id, user.id);
        assert_eq!(created.email, "new@mail.com");
    }

    #[tokio::test]
    async fn unique_violation_maps_to_email_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".into(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo.create_user(new_user()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn other_errors_map_to_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("timeout".into())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo.create_user(new_user()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::DatabaseError(_)));
    }
}
