use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::dto::AuthSessionDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequestDto {
    #[schema(example = "cinephile")]
    pub username: String,
    #[schema(example = "cine@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Cine Phile")]
    pub name: String,
    #[schema(example = "popcorn-time")]
    pub password: String,
}

/// Create an account and open a session
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSessionDto>)),
        (status = 400, description = "Invalid username, email or password", body = ErrorResponse),
        (status = 409, description = "Username or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterUserRequest::new(dto.username, dto.email, dto.name, dto.password) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(username = %request.username(), "Registration attempt");

    match data.auth.register.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User registered");
            ApiResponse::created(AuthSessionDto::from(session))
        }

        Err(RegisterUserError::UsernameAlreadyExists) => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }

        Err(RegisterUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }

        Err(RegisterUserError::WeakPassword(e)) => {
            warn!("Registration rejected: {}", e);
            ApiResponse::bad_request("WEAK_PASSWORD", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
