use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::review::application::ports::outgoing::review_query::ReviewView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetReviewUseCase: Send + Sync {
    async fn execute(&self, review_id: Uuid) -> Result<ReviewView, GetReviewError>;
}
