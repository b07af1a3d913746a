use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Only the author may delete this review")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, review_id: Uuid) -> Result<(), DeleteReviewError>;
}
