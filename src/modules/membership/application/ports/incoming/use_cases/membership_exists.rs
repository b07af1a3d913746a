use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipExistsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MembershipExistsUseCase: Send + Sync {
    async fn execute(&self, user: UserId, movie_id: MovieId)
        -> Result<bool, MembershipExistsError>;
}
