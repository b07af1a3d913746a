use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::outgoing::review_repository::{
    PatchReviewData, ReviewResult,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Only the author may edit this review")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, PatchReviewError>;
}
