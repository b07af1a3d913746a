use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnfollowUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UnfollowUserUseCase: Send + Sync {
    async fn execute(&self, from: UserId, to: UserId) -> Result<(), UnfollowUserError>;
}
