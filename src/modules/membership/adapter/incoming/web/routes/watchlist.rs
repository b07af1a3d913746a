use actix_web::{delete, get, post, web, Responder};

use super::dto::{
    AddMembershipRequestDto, MembershipCreatedDto, MembershipEntryDto, MembershipExistsDto,
    MembershipExistsQuery,
};
use super::membership_handlers;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/watchlist",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    request_body = AddMembershipRequestDto,
    responses(
        (status = 200, description = "Movie on the watchlist", body = inline(SuccessResponse<MembershipCreatedDto>)),
        (status = 400, description = "Invalid movie_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/watchlist")]
pub async fn add_watchlist_handler(
    user: AuthenticatedUser,
    req: web::Json<AddMembershipRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::add(&data.watchlist, user, req.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/api/watchlist",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's watchlist, newest first", body = inline(SuccessResponse<Vec<MembershipEntryDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/watchlist")]
pub async fn list_watchlist_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::list(&data.watchlist, user).await
}

#[utoipa::path(
    get,
    path = "/api/watchlist/exists",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    params(MembershipExistsQuery),
    responses(
        (status = 200, description = "Whether the movie is on the watchlist", body = inline(SuccessResponse<MembershipExistsDto>)),
        (status = 400, description = "Missing movie_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/watchlist/exists")]
pub async fn watchlist_exists_handler(
    user: AuthenticatedUser,
    query: web::Query<MembershipExistsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::exists(&data.watchlist, user, query.into_inner()).await
}

#[utoipa::path(
    delete,
    path = "/api/watchlist/{movie_id}",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    params(("movie_id" = String, Path, description = "Catalogue id")),
    responses(
        (status = 204, description = "Movie no longer on the watchlist"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[delete("/api/watchlist/{movie_id}")]
pub async fn remove_watchlist_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::remove(&data.watchlist, user, &path.into_inner()).await
}
