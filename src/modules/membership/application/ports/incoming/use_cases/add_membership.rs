use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddMembershipError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Returns whether the movie was newly added.
#[async_trait]
pub trait AddMembershipUseCase: Send + Sync {
    async fn execute(&self, user: UserId, movie_id: MovieId) -> Result<bool, AddMembershipError>;
}
