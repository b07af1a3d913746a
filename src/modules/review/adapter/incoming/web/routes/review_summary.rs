use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::dto::ReviewSummaryDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::review::application::ports::incoming::use_cases::ReviewSummaryError;
use crate::shared::api::ApiResponse;
use crate::shared::movie_id::MovieId;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewSummaryQuery {
    /// Required
    pub movie_id: Option<String>,
}

/// Review count and average rating of a movie
#[utoipa::path(
    get,
    path = "/api/reviews/summary",
    tag = "reviews",
    params(ReviewSummaryQuery),
    responses(
        (status = 200, description = "Aggregated ratings", body = inline(SuccessResponse<ReviewSummaryDto>)),
        (status = 400, description = "movie_id missing", body = ErrorResponse),
    )
)]
#[get("/api/reviews/summary")]
pub async fn review_summary_handler(
    query: web::Query<ReviewSummaryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let movie_id = match MovieId::parse(query.movie_id.as_deref().unwrap_or_default()) {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.review.summary.execute(movie_id).await {
        Ok(summary) => ApiResponse::success(ReviewSummaryDto::from(summary)),

        Err(ReviewSummaryError::QueryFailed(msg)) => {
            error!("Failed to aggregate reviews: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
