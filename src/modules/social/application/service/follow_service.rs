use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::incoming::use_cases::{
    FollowUserError, FollowUserUseCase, UnfollowUserError, UnfollowUserUseCase,
};
use crate::modules::social::application::ports::outgoing::{
    FollowRepository, FollowRepositoryError,
};

pub struct FollowService<R>
where
    R: FollowRepository,
{
    repository: R,
}

impl<R> FollowService<R>
where
    R: FollowRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FollowUserUseCase for FollowService<R>
where
    R: FollowRepository + Send + Sync,
{
    async fn execute(&self, from: UserId, to: UserId) -> Result<bool, FollowUserError> {
        // also forbidden by the follows CHECK constraint
        if from == to {
            return Err(FollowUserError::SelfFollow);
        }

        let created = self
            .repository
            .follow(from, to)
            .await
            .map_err(|e| match e {
                FollowRepositoryError::TargetNotFound => FollowUserError::TargetNotFound,
                FollowRepositoryError::DatabaseError(msg) => FollowUserError::RepositoryError(msg),
            })?;

        if created {
            info!(%from, %to, "User followed");
        }
        Ok(created)
    }
}

#[async_trait]
impl<R> UnfollowUserUseCase for FollowService<R>
where
    R: FollowRepository + Send + Sync,
{
    async fn execute(&self, from: UserId, to: UserId) -> Result<(), UnfollowUserError> {
        self.repository
            .unfollow(from, to)
            .await
            .map_err(|e| UnfollowUserError::RepositoryError(e.to_string()))
    }
}
