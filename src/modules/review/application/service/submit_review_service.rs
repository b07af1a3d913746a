use async_trait::async_trait;
use tracing::info;

use crate::modules::review::application::ports::incoming::use_cases::{
    SubmitReviewError, SubmitReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::review_repository::{
    ReviewRepository, ReviewRepositoryError, SubmitReviewData, UpsertOutcome,
};

pub struct SubmitReviewService<R>
where
    R: ReviewRepository,
{
    review_repository: R,
}

impl<R> SubmitReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repository: R) -> Self {
        Self { review_repository }
    }
}

#[async_trait]
impl<R> SubmitReviewUseCase for SubmitReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, data: SubmitReviewData) -> Result<UpsertOutcome, SubmitReviewError> {
        let data = SubmitReviewData {
            text: data.text.map(|t| t.trim().to_string()),
            ..data
        };

        let outcome = self
            .review_repository
            .upsert_review(data)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::DatabaseError(msg) => SubmitReviewError::RepositoryError(msg),
                // upsert is keyed on the caller, ownership cannot fail here
                other => SubmitReviewError::RepositoryError(other.to_string()),
            })?;

        info!(
            review_id = %outcome.review.id,
            movie_id = %outcome.review.movie_id,
            created = outcome.created,
            "Review submitted"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::review::application::domain::entities::Rating;
    use crate::modules::review::application::ports::outgoing::review_repository::{
        PatchReviewData, ReviewResult,
    };
    use crate::shared::movie_id::MovieId;

    mock! {
        pub ReviewRepo {}
        #[async_trait]
        impl ReviewRepository for ReviewRepo {
            async fn upsert_review(&self, data: SubmitReviewData) -> Result<UpsertOutcome, ReviewRepositoryError>;
            async fn patch_review(
                &self,
                owner: UserId,
                review_id: Uuid,
                data: PatchReviewData,
            ) -> Result<ReviewResult, ReviewRepositoryError>;
            async fn delete_review(&self, owner: UserId, review_id: Uuid) -> Result<(), ReviewRepositoryError>;
        }
    }

    fn outcome_for(data: &SubmitReviewData, created: bool) -> UpsertOutcome {
        UpsertOutcome {
            review: ReviewResult {
                id: Uuid::new_v4(),
                user_id: data.user_id,
                movie_id: data.movie_id.as_str().to_string(),
                rating: data.rating.map(|r| r.value()).unwrap_or(0.0),
                text: data.text.clone().unwrap_or_default(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            created,
        }
    }

    fn submission(text: Option<&str>) -> SubmitReviewData {
        SubmitReviewData {
            user_id: UserId::from(Uuid::new_v4()),
            movie_id: MovieId::parse("550").unwrap(),
            rating: Some(Rating::new(4.0).unwrap()),
            text: text.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn text_is_trimmed_before_storage() {
        let mut repo = MockReviewRepo::new();
        repo.expect_upsert_review()
            .withf(|data| data.text.as_deref() == Some("Mind-bending"))
            .times(1)
            .returning(|data| Ok(outcome_for(&data, true)));

        let service = SubmitReviewService::new(repo);
        let outcome = service
            .execute(submission(Some("  Mind-bending \n")))
            .await
            .unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.review.text, "Mind-bending");
    }

    #[tokio::test]
    async fn absent_text_stays_absent() {
        let mut repo = MockReviewRepo::new();
        repo.expect_upsert_review()
            .withf(|data| data.text.is_none())
            .returning(|data| Ok(outcome_for(&data, false)));

        let outcome = SubmitReviewService::new(repo)
            .execute(submission(None))
            .await
            .unwrap();

        assert!(!outcome.created);
    }

    #[tokio::test]
    async fn database_error_is_repository_error() {
        let mut repo = MockReviewRepo::new();
        repo.expect_upsert_review()
            .returning(|_| Err(ReviewRepositoryError::DatabaseError("db down".to_string())));

        let err = SubmitReviewService::new(repo)
            .execute(submission(None))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitReviewError::RepositoryError(msg) if msg == "db down"));
    }
}
