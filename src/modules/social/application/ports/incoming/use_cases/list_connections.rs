use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::{FollowView, PublicUser};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListConnectionsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListFollowersUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<Vec<FollowView>, ListConnectionsError>;
}

#[async_trait]
pub trait ListFollowingUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<Vec<FollowView>, ListConnectionsError>;
}

/// Friends are users followed by and following `user`, ordered by username.
#[async_trait]
pub trait ListFriendsUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<Vec<PublicUser>, ListConnectionsError>;
}
