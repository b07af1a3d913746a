use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FollowRepositoryError {
    #[error("User to follow does not exist")]
    TargetNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Creates the `from -> to` edge if absent. Returns whether it was created.
    async fn follow(&self, from: UserId, to: UserId) -> Result<bool, FollowRepositoryError>;

    async fn unfollow(&self, from: UserId, to: UserId) -> Result<(), FollowRepositoryError>;
}
