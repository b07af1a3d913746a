use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::review::application::domain::entities::ReviewSummary;
use crate::modules::review::application::ports::outgoing::{ReviewResult, ReviewView};
use crate::shared::pagination::PageResult;

/// A review as stored, returned by the write endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewDto {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "603")]
    pub movie_id: String,
    /// 1-5, or 0 when no rating was given
    #[schema(example = 4.5)]
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewResult> for ReviewDto {
    fn from(r: ReviewResult) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id.value(),
            movie_id: r.movie_id,
            rating: r.rating,
            text: r.text,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewViewDto {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "cinephile")]
    pub user_username: String,
    #[schema(example = "603")]
    pub movie_id: String,
    #[schema(example = 4.5)]
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewView> for ReviewViewDto {
    fn from(v: ReviewView) -> Self {
        Self {
            id: v.id,
            user_id: v.user_id.value(),
            user_username: v.user_username,
            movie_id: v.movie_id,
            rating: v.rating,
            text: v.text,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewPageDto {
    pub items: Vec<ReviewViewDto>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl From<PageResult<ReviewView>> for ReviewPageDto {
    fn from(page: PageResult<ReviewView>) -> Self {
        let page = page.map(ReviewViewDto::from);
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewSummaryDto {
    #[schema(example = "603")]
    pub movie_id: String,
    #[schema(example = 2)]
    pub count: u64,
    /// Rounded to one decimal, 0 without ratings
    #[schema(example = 4.5)]
    pub average: f64,
}

impl From<ReviewSummary> for ReviewSummaryDto {
    fn from(s: ReviewSummary) -> Self {
        Self {
            movie_id: s.movie_id,
            count: s.count,
            average: s.average,
        }
    }
}
