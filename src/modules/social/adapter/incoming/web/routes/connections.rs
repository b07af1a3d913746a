use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{FollowViewDto, PublicUserDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::social::application::domain::entities::FollowView;
use crate::modules::social::application::ports::incoming::use_cases::ListConnectionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn follow_views(
    user: &AuthenticatedUser,
    result: Result<Vec<FollowView>, ListConnectionsError>,
) -> HttpResponse {
    match result {
        Ok(views) => ApiResponse::success(
            views
                .into_iter()
                .map(FollowViewDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to read follow graph of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Users following the caller
#[utoipa::path(
    get,
    path = "/api/social/followers",
    tag = "social",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Followers, newest first", body = inline(SuccessResponse<Vec<FollowViewDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/social/followers")]
pub async fn followers_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let result = data.social.followers.execute(user.id()).await;
    follow_views(&user, result)
}

/// Users the caller follows
#[utoipa::path(
    get,
    path = "/api/social/following",
    tag = "social",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Followed users, newest first", body = inline(SuccessResponse<Vec<FollowViewDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/social/following")]
pub async fn following_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let result = data.social.following.execute(user.id()).await;
    follow_views(&user, result)
}

/// Users the caller follows who follow back
#[utoipa::path(
    get,
    path = "/api/social/friends",
    tag = "social",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Mutual follows, by username", body = inline(SuccessResponse<Vec<PublicUserDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/social/friends")]
pub async fn friends_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.social.friends.execute(user.id()).await {
        Ok(friends) => ApiResponse::success(
            friends
                .into_iter()
                .map(PublicUserDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to compute friends of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
