use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::ReviewDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::domain::entities::Rating;
use crate::modules::review::application::ports::incoming::use_cases::SubmitReviewError;
use crate::modules::review::application::ports::outgoing::SubmitReviewData;
use crate::shared::api::ApiResponse;
use crate::shared::movie_id::{MovieId, RawMovieId};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReviewRequestDto {
    /// Catalogue id, string or number
    #[schema(value_type = String, example = "603")]
    pub movie_id: Option<RawMovieId>,

    /// 1-5. Omit to keep the stored rating (or 0 on first submit)
    #[schema(example = 4.5)]
    pub rating: Option<f64>,

    /// Omit to keep the stored text (or empty on first submit)
    pub text: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create or overwrite the caller's review of a movie
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = SubmitReviewRequestDto,
    responses(
        (status = 201, description = "Review created", body = inline(SuccessResponse<ReviewDto>)),
        (status = 200, description = "Existing review overwritten", body = inline(SuccessResponse<ReviewDto>)),
        (status = 400, description = "Invalid movie_id or rating", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/reviews")]
pub async fn submit_review_handler(
    user: AuthenticatedUser,
    req: web::Json<SubmitReviewRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = req.into_inner();

    let movie_id = match MovieId::from_raw(body.movie_id) {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };
    let rating = match body.rating.map(Rating::new).transpose() {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    let submission = SubmitReviewData {
        user_id: user.id(),
        movie_id,
        rating,
        text: body.text,
    };

    match data.review.submit.execute(submission).await {
        Ok(outcome) => ApiResponse::created_or_ok(ReviewDto::from(outcome.review), outcome.created),

        Err(SubmitReviewError::RepositoryError(e)) => {
            error!("Failed to submit review for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
