use async_trait::async_trait;

use crate::modules::review::application::domain::entities::ReviewSummary;
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewSummaryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ReviewSummaryUseCase: Send + Sync {
    async fn execute(&self, movie_id: MovieId) -> Result<ReviewSummary, ReviewSummaryError>;
}
