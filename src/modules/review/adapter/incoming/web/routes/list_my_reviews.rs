use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::ReviewPageDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::ports::incoming::use_cases::ListReviewsError;
use crate::modules::review::application::ports::outgoing::ReviewListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::AppState;

/// The caller's own reviews, newest first
#[utoipa::path(
    get,
    path = "/api/reviews/mine",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "One page of the caller's reviews", body = inline(SuccessResponse<ReviewPageDto>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/reviews/mine")]
pub async fn list_my_reviews_handler(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ReviewListFilter {
        movie_id: None,
        user_id: Some(user.id()),
    };

    match data.review.list.execute(filter, query.into_inner().into()).await {
        Ok(result) => ApiResponse::success(ReviewPageDto::from(result)),

        Err(ListReviewsError::QueryFailed(msg)) => {
            error!("Failed to list reviews of {}: {}", user.user_id, msg);
            ApiResponse::internal_error()
        }
    }
}
