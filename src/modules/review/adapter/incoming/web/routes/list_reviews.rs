use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::dto::ReviewPageDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::review::application::ports::incoming::use_cases::ListReviewsError;
use crate::modules::review::application::ports::outgoing::ReviewListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::movie_id::MovieId;
use crate::shared::pagination::PageRequest;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListReviewsQuery {
    /// Only reviews of this movie; blank means all movies
    pub movie_id: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ListReviewsQuery {
    fn into_parts(self) -> Result<(ReviewListFilter, PageRequest), String> {
        let movie_id = match self.movie_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(MovieId::parse(raw).map_err(|e| e.to_string())?),
        };

        Ok((
            ReviewListFilter {
                movie_id,
                user_id: None,
            },
            PageRequest::from_query(self.page, self.per_page),
        ))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Public review feed, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "reviews",
    params(ListReviewsQuery),
    responses(
        (status = 200, description = "One page of reviews", body = inline(SuccessResponse<ReviewPageDto>)),
        (status = 400, description = "Invalid query", body = ErrorResponse),
    )
)]
#[get("/api/reviews")]
pub async fn list_reviews_handler(
    query: web::Query<ListReviewsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = match query.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(msg) => return ApiResponse::validation_error(&msg),
    };

    match data.review.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(ReviewPageDto::from(result)),

        Err(ListReviewsError::QueryFailed(msg)) => {
            error!("Failed to list reviews: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
