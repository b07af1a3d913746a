use std::collections::HashSet;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::{FollowView, PublicUser};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocialQuery: Send + Sync {
    /// Users with an edge to `user`, newest edge first.
    async fn followers(&self, user: UserId) -> Result<Vec<FollowView>, SocialQueryError>;

    /// Users `user` has an edge to, newest edge first.
    async fn following(&self, user: UserId) -> Result<Vec<FollowView>, SocialQueryError>;

    async fn follower_ids(&self, user: UserId) -> Result<HashSet<UserId>, SocialQueryError>;

    async fn following_ids(&self, user: UserId) -> Result<HashSet<UserId>, SocialQueryError>;

    async fn users_by_ids(&self, ids: Vec<UserId>) -> Result<Vec<PublicUser>, SocialQueryError>;
}
