use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub token_expiration: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub token_expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn set_token_expiration(
        &self,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;
}
