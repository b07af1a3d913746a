use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::movie_id::MovieId;
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Public projection of a review, joined with its author's username.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: Uuid,
    pub user_id: UserId,
    pub user_username: String,
    pub movie_id: String,
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewListFilter {
    pub movie_id: Option<MovieId>,
    pub user_id: Option<UserId>,
}

/// Count and rating sum over every review of one movie. Unrated reviews add 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingTotals {
    pub count: u64,
    pub sum: f64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<ReviewView>, ReviewQueryError>;

    /// Newest first.
    async fn list_reviews(
        &self,
        filter: ReviewListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ReviewView>, ReviewQueryError>;

    async fn rating_totals(&self, movie_id: &MovieId) -> Result<RatingTotals, ReviewQueryError>;
}
