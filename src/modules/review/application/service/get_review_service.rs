use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::review::application::ports::incoming::use_cases::{
    GetReviewError, GetReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::review_query::{ReviewQuery, ReviewView};

pub struct GetReviewService<Q>
where
    Q: ReviewQuery,
{
    query: Q,
}

impl<Q> GetReviewService<Q>
where
    Q: ReviewQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReviewUseCase for GetReviewService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self, review_id: Uuid) -> Result<ReviewView, GetReviewError> {
        self.query
            .find_by_id(review_id)
            .await
            .map_err(|e| GetReviewError::QueryFailed(e.to_string()))?
            .ok_or(GetReviewError::NotFound)
    }
}
