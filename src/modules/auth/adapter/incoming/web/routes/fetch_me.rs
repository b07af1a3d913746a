use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::AccountDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current account
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's account", body = inline(SuccessResponse<AccountDto>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.fetch_profile.execute(user.id()).await {
        Ok(account) => ApiResponse::success(AccountDto::from(account)),

        Err(FetchUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchUserError::QueryError(e)) => {
            error!("Database error fetching account {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
