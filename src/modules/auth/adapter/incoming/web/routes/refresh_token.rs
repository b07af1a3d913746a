use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseDto {
    pub access_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponseDto>)),
        (status = 400, description = "Empty token or wrong token type", body = ErrorResponse),
        (status = 401, description = "Expired or invalid refresh token", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.auth.refresh.execute(request).await {
        Ok(response) => {
            info!("Access token refreshed");
            ApiResponse::success(RefreshTokenResponseDto {
                access_token: response.access_token,
            })
        }

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired. Please login again.")
        }

        Err(RefreshTokenError::TokenInvalid) => {
            warn!("Token refresh failed: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::InvalidTokenType) => ApiResponse::bad_request(
            "INVALID_TOKEN_TYPE",
            "Invalid token type. Please use a refresh token.",
        ),

        Err(RefreshTokenError::TokenNotYetValid) => {
            ApiResponse::bad_request("TOKEN_NOT_YET_VALID", "Token is not yet valid")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
