use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::ReviewViewDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::review::application::ports::incoming::use_cases::GetReviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read of a single review
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "The review", body = inline(SuccessResponse<ReviewViewDto>)),
        (status = 404, description = "No such review", body = ErrorResponse),
    )
)]
#[get("/api/reviews/{id}")]
pub async fn get_review_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let review_id = path.into_inner();

    match data.review.get.execute(review_id).await {
        Ok(review) => ApiResponse::success(ReviewViewDto::from(review)),

        Err(GetReviewError::NotFound) => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found")
        }

        Err(GetReviewError::QueryFailed(e)) => {
            error!("Failed to load review {}: {}", review_id, e);
            ApiResponse::internal_error()
        }
    }
}
