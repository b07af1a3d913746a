use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowUserError {
    #[error("You cannot follow yourself")]
    SelfFollow,

    #[error("User not found")]
    TargetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Returns whether a new edge was created.
#[async_trait]
pub trait FollowUserUseCase: Send + Sync {
    async fn execute(&self, from: UserId, to: UserId) -> Result<bool, FollowUserError>;
}
