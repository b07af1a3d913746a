use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::PublicProfileDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public profile with activity counts
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Profile found", body = inline(SuccessResponse<PublicProfileDto>)),
        (status = 404, description = "Unknown username", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}")]
pub async fn get_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.profile.get.execute(&username).await {
        Ok(profile) => ApiResponse::success(PublicProfileDto::from(profile)),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GetProfileError::QueryFailed(msg)) => {
            error!("Failed to load profile {}: {}", username, msg);
            ApiResponse::internal_error()
        }
    }
}
