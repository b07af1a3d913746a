use async_trait::async_trait;

use crate::modules::review::application::ports::outgoing::review_query::{
    ReviewListFilter, ReviewView,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListReviewsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Paginated review feed. Serves the public listing, the caller's own
/// reviews and the public profile tab through the filter.
#[async_trait]
pub trait ListReviewsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ReviewListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ReviewView>, ListReviewsError>;
}
