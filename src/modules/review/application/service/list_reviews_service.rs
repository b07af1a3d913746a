use async_trait::async_trait;

use crate::modules::review::application::ports::incoming::use_cases::{
    ListReviewsError, ListReviewsUseCase,
};
use crate::modules::review::application::ports::outgoing::review_query::{
    ReviewListFilter, ReviewQuery, ReviewView,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    query: Q,
}

impl<Q> ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListReviewsUseCase for ListReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ReviewListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ReviewView>, ListReviewsError> {
        self.query
            .list_reviews(filter, page)
            .await
            .map_err(|e| ListReviewsError::QueryFailed(e.to_string()))
    }
}
