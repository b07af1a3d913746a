use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::incoming::use_cases::{
    DeleteReviewError, DeleteReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::review_repository::{
    ReviewRepository, ReviewRepositoryError,
};

pub struct DeleteReviewService<R>
where
    R: ReviewRepository,
{
    review_repository: R,
}

impl<R> DeleteReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repository: R) -> Self {
        Self { review_repository }
    }
}

#[async_trait]
impl<R> DeleteReviewUseCase for DeleteReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, review_id: Uuid) -> Result<(), DeleteReviewError> {
        self.review_repository
            .delete_review(owner, review_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => DeleteReviewError::NotFound,
                ReviewRepositoryError::NotOwner => DeleteReviewError::NotOwner,
                ReviewRepositoryError::DatabaseError(msg) => {
                    DeleteReviewError::RepositoryError(msg)
                }
            })?;

        info!(%review_id, user_id = %owner, "Review deleted");
        Ok(())
    }
}
