use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::MovieListDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's lists, newest first, with their items
#[utoipa::path(
    get,
    path = "/api/lists",
    tag = "lists",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's lists", body = inline(SuccessResponse<Vec<MovieListDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/lists")]
pub async fn my_lists_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.movie_list.list_for_user.execute(user.id()).await {
        Ok(lists) => ApiResponse::success(
            lists
                .into_iter()
                .map(MovieListDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to list movie lists of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
