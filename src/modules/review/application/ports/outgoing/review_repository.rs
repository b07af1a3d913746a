use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::Rating;
use crate::shared::movie_id::MovieId;
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Create-or-overwrite payload. `None` fields fall back to the column
/// default on insert and keep the stored value on update.
#[derive(Debug, Clone)]
pub struct SubmitReviewData {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: Option<Rating>,
    pub text: Option<String>,
}

/// Patch semantics:
/// - rating: None => keep, Some => replace
/// - text: Unset => keep, Null => clear to "", Value => replace
#[derive(Debug, Clone, Default)]
pub struct PatchReviewData {
    pub rating: Option<Rating>,
    pub text: PatchField<String>,
}

impl PatchReviewData {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.text.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewResult {
    pub id: Uuid,
    pub user_id: UserId,
    pub movie_id: String,
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOutcome {
    pub review: ReviewResult,
    /// false when an existing (user, movie) review was overwritten
    pub created: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Review not found")]
    NotFound,

    #[error("Review belongs to another user")]
    NotOwner,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn upsert_review(
        &self,
        data: SubmitReviewData,
    ) -> Result<UpsertOutcome, ReviewRepositoryError>;

    async fn patch_review(
        &self,
        owner: UserId,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError>;

    async fn delete_review(&self, owner: UserId, review_id: Uuid)
        -> Result<(), ReviewRepositoryError>;
}
