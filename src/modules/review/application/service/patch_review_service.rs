use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::incoming::use_cases::{
    PatchReviewError, PatchReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::review_repository::{
    PatchReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PatchReviewService<R>
where
    R: ReviewRepository,
{
    review_repository: R,
}

impl<R> PatchReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repository: R) -> Self {
        Self { review_repository }
    }
}

#[async_trait]
impl<R> PatchReviewUseCase for PatchReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, PatchReviewError> {
        let text = match data.text {
            PatchField::Value(t) => PatchField::Value(t.trim().to_string()),
            other => other,
        };

        self.review_repository
            .patch_review(owner, review_id, PatchReviewData { text, ..data })
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => PatchReviewError::NotFound,
                ReviewRepositoryError::NotOwner => PatchReviewError::NotOwner,
                ReviewRepositoryError::DatabaseError(msg) => PatchReviewError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::modules::review::application::domain::entities::Rating;
    use crate::modules::review::application::ports::outgoing::review_repository::{
        SubmitReviewData, UpsertOutcome,
    };

    struct MockReviewRepo {
        result: Result<ReviewResult, ReviewRepositoryError>,
        seen: Mutex<Option<PatchReviewData>>,
    }

    impl MockReviewRepo {
        fn returning(result: Result<ReviewResult, ReviewRepositoryError>) -> Self {
            Self {
                result,
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ReviewRepository for MockReviewRepo {
        async fn upsert_review(
            &self,
            _data: SubmitReviewData,
        ) -> Result<UpsertOutcome, ReviewRepositoryError> {
            unimplemented!("not needed for patch_review tests")
        }

        async fn patch_review(
            &self,
            _owner: UserId,
            _review_id: Uuid,
            data: PatchReviewData,
        ) -> Result<ReviewResult, ReviewRepositoryError> {
            *self.seen.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn delete_review(
            &self,
            _owner: UserId,
            _review_id: Uuid,
        ) -> Result<(), ReviewRepositoryError> {
            unimplemented!("not needed for patch_review tests")
        }
    }

    fn stored(owner: UserId, id: Uuid) -> ReviewResult {
        ReviewResult {
            id,
            user_id: owner,
            movie_id: "13".to_string(),
            rating: 3.0,
            text: "Run, Forrest".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn forwards_trimmed_text_and_rating() {
        let owner = UserId::from(Uuid::new_v4());
        let id = Uuid::new_v4();
        let service = PatchReviewService::new(MockReviewRepo::returning(Ok(stored(owner, id))));

        let data = PatchReviewData {
            rating: Some(Rating::new(3.0).unwrap()),
            text: PatchField::Value("  Run, Forrest  ".to_string()),
        };
        let result = service.execute(owner, id, data).await.unwrap();
        assert_eq!(result.id, id);

        let seen = service.review_repository.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.text, PatchField::Value("Run, Forrest".to_string()));
        assert_eq!(seen.rating.map(|r| r.value()), Some(3.0));
    }

    #[tokio::test]
    async fn null_text_is_passed_through() {
        let owner = UserId::from(Uuid::new_v4());
        let id = Uuid::new_v4();
        let service = PatchReviewService::new(MockReviewRepo::returning(Ok(stored(owner, id))));

        let data = PatchReviewData {
            rating: None,
            text: PatchField::Null,
        };
        service.execute(owner, id, data).await.unwrap();

        let seen = service.review_repository.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.text, PatchField::Null);
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn maps_not_owner() {
        let service =
            PatchReviewService::new(MockReviewRepo::returning(Err(ReviewRepositoryError::NotOwner)));

        let err = service
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4(), PatchReviewData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PatchReviewError::NotOwner));
    }

    #[tokio::test]
    async fn maps_not_found() {
        let service =
            PatchReviewService::new(MockReviewRepo::returning(Err(ReviewRepositoryError::NotFound)));

        let err = service
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4(), PatchReviewData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PatchReviewError::NotFound));
    }

    #[tokio::test]
    async fn maps_database_error() {
        let service = PatchReviewService::new(MockReviewRepo::returning(Err(
            ReviewRepositoryError::DatabaseError("db down".to_string()),
        )));

        let err = service
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4(), PatchReviewData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PatchReviewError::RepositoryError(msg) if msg == "db down"));
    }
}
