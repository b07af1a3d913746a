use async_trait::async_trait;

use crate::modules::review::application::domain::entities::ReviewSummary;
use crate::modules::review::application::ports::incoming::use_cases::{
    ReviewSummaryError, ReviewSummaryUseCase,
};
use crate::modules::review::application::ports::outgoing::review_query::ReviewQuery;
use crate::shared::movie_id::MovieId;

pub struct ReviewSummaryService<Q>
where
    Q: ReviewQuery,
{
    query: Q,
}

impl<Q> ReviewSummaryService<Q>
where
    Q: ReviewQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ReviewSummaryUseCase for ReviewSummaryService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self, movie_id: MovieId) -> Result<ReviewSummary, ReviewSummaryError> {
        let totals = self
            .query
            .rating_totals(&movie_id)
            .await
            .map_err(|e| ReviewSummaryError::QueryFailed(e.to_string()))?;

        Ok(ReviewSummary::from_totals(movie_id, totals.count, totals.sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::review::application::ports::outgoing::review_query::{
        RatingTotals, ReviewListFilter, ReviewQueryError, ReviewView,
    };
    use crate::shared::pagination::{PageRequest, PageResult};

    struct TotalsQuery(Result<RatingTotals, ReviewQueryError>);

    #[async_trait]
    impl ReviewQuery for TotalsQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<ReviewView>, ReviewQueryError> {
            unimplemented!()
        }

        async fn list_reviews(
            &self,
            _filter: ReviewListFilter,
            _page: PageRequest,
        ) -> Result<PageResult<ReviewView>, ReviewQueryError> {
            unimplemented!()
        }

        async fn rating_totals(&self, _movie_id: &MovieId) -> Result<RatingTotals, ReviewQueryError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn unrated_review_counts_as_zero() {
        // One review without stars (stored as 0) and one rated 4.
        let service = ReviewSummaryService::new(TotalsQuery(Ok(RatingTotals {
            count: 2,
            sum: 4.0,
        })));

        let summary = service.execute(MovieId::parse("157336").unwrap()).await.unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, 2.0);
    }

    #[tokio::test]
    async fn averages_all_reviews() {
        let service = ReviewSummaryService::new(TotalsQuery(Ok(RatingTotals {
            count: 2,
            sum: 9.0,
        })));

        let summary = service.execute(MovieId::parse("157336").unwrap()).await.unwrap();
        assert_eq!(summary.movie_id, "157336");
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, 4.5);
    }

    #[tokio::test]
    async fn no_reviews_is_zero_not_nan() {
        let service = ReviewSummaryService::new(TotalsQuery(Ok(RatingTotals::default())));

        let summary = service.execute(MovieId::parse("1").unwrap()).await.unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let service = ReviewSummaryService::new(TotalsQuery(Err(ReviewQueryError::DatabaseError(
            "gone".to_string(),
        ))));

        let err = service.execute(MovieId::parse("1").unwrap()).await.unwrap_err();
        assert!(matches!(err, ReviewSummaryError::QueryFailed(_)));
    }
}
