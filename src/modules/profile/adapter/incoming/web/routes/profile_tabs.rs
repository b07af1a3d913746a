use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::resolve_owner_id_or_response;
use crate::modules::membership::adapter::incoming::web::routes::MembershipEntryDto;
use crate::modules::membership::application::membership_use_cases::MembershipUseCases;
use crate::modules::movie_list::adapter::incoming::web::routes::MovieListDto;
use crate::modules::review::adapter::incoming::web::routes::ReviewPageDto;
use crate::modules::review::application::ports::outgoing::ReviewListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::AppState;

/// A user's reviews, newest first
#[utoipa::path(
    get,
    path = "/api/users/{username}/reviews",
    tag = "users",
    params(("username" = String, Path, description = "Account username"), PageQuery),
    responses(
        (status = 200, description = "One page of the user's reviews", body = inline(SuccessResponse<ReviewPageDto>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/reviews")]
pub async fn user_reviews_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = match resolve_owner_id_or_response(&data, &path).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let filter = ReviewListFilter {
        movie_id: None,
        user_id: Some(owner),
    };

    match data.review.list.execute(filter, query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(ReviewPageDto::from(page)),
        Err(e) => {
            error!("Failed to list reviews of {}: {}", path.as_str(), e);
            ApiResponse::internal_error()
        }
    }
}

/// A user's movie lists with their items
#[utoipa::path(
    get,
    path = "/api/users/{username}/lists",
    tag = "users",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "The user's lists", body = inline(SuccessResponse<Vec<MovieListDto>>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/lists")]
pub async fn user_lists_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = match resolve_owner_id_or_response(&data, &path).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.movie_list.list_for_user.execute(owner).await {
        Ok(lists) => ApiResponse::success(
            lists
                .into_iter()
                .map(MovieListDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to list movie lists of {}: {}", path.as_str(), e);
            ApiResponse::internal_error()
        }
    }
}

async fn membership_tab(
    data: &web::Data<AppState>,
    use_cases: &MembershipUseCases,
    username: &str,
) -> actix_web::HttpResponse {
    let owner = match resolve_owner_id_or_response(data, username).await {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match use_cases.list.execute(owner).await {
        Ok(entries) => ApiResponse::success(
            entries
                .into_iter()
                .map(MembershipEntryDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to list memberships of {}: {}", username, e);
            ApiResponse::internal_error()
        }
    }
}

/// A user's favourite movies, newest first
#[utoipa::path(
    get,
    path = "/api/users/{username}/favourites",
    tag = "users",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Favourite movies", body = inline(SuccessResponse<Vec<MembershipEntryDto>>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/favourites")]
pub async fn user_favourites_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_tab(&data, &data.favourites, &path).await
}

/// A user's watchlist, newest first
#[utoipa::path(
    get,
    path = "/api/users/{username}/watchlist",
    tag = "users",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Watchlist entries", body = inline(SuccessResponse<Vec<MembershipEntryDto>>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/watchlist")]
pub async fn user_watchlist_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_tab(&data, &data.watchlist, &path).await
}
