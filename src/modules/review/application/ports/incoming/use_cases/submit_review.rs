use async_trait::async_trait;

use crate::modules::review::application::ports::outgoing::review_repository::{
    SubmitReviewData, UpsertOutcome,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitReviewError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Creates the caller's review of a movie, or overwrites it in place.
#[async_trait]
pub trait SubmitReviewUseCase: Send + Sync {
    async fn execute(&self, data: SubmitReviewData) -> Result<UpsertOutcome, SubmitReviewError>;
}
