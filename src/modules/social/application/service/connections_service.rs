use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::{FollowView, PublicUser};
use crate::modules::social::application::ports::incoming::use_cases::{
    ListConnectionsError, ListFollowersUseCase, ListFollowingUseCase, ListFriendsUseCase,
};
use crate::modules::social::application::ports::outgoing::{SocialQuery, SocialQueryError};

pub struct ConnectionsService<Q>
where
    Q: SocialQuery,
{
    query: Q,
}

impl<Q> ConnectionsService<Q>
where
    Q: SocialQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn query_failed(e: SocialQueryError) -> ListConnectionsError {
    ListConnectionsError::QueryFailed(e.to_string())
}

#[async_trait]
impl<Q> ListFollowersUseCase for ConnectionsService<Q>
where
    Q: SocialQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<FollowView>, ListConnectionsError> {
        self.query.followers(user).await.map_err(query_failed)
    }
}

#[async_trait]
impl<Q> ListFollowingUseCase for ConnectionsService<Q>
where
    Q: SocialQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<FollowView>, ListConnectionsError> {
        self.query.following(user).await.map_err(query_failed)
    }
}

#[async_trait]
impl<Q> ListFriendsUseCase for ConnectionsService<Q>
where
    Q: SocialQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<PublicUser>, ListConnectionsError> {
        let following = self.query.following_ids(user).await.map_err(query_failed)?;
        let followers = self.query.follower_ids(user).await.map_err(query_failed)?;

        let mutual: Vec<UserId> = following.intersection(&followers).copied().collect();
        if mutual.is_empty() {
            return Ok(vec![]);
        }

        let mut friends = self.query.users_by_ids(mutual).await.map_err(query_failed)?;
        friends.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(friends)
    }
}
