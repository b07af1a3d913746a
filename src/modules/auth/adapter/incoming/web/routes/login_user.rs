use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::dto::AuthSessionDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "cinephile")]
    pub username: String,
    #[schema(example = "popcorn-time")]
    pub password: String,
}

/// Log in with username and password
///
/// Extends the stored session window and returns a fresh token pair.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSessionDto>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(username = %request.username(), "Login attempt");

    match data.auth.login.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(AuthSessionDto::from(session))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AccountView, AuthSession, UserId};
    use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    // ========================================================================
    // Mock Use Cases
    // ========================================================================

    struct MockLogin {
        result: Result<AuthSession, LoginError>,
    }

    #[async_trait]
    impl ILoginUserUseCase for MockLogin {
        async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
            self.result.clone()
        }
    }

    fn session() -> AuthSession {
        AuthSession {
            user: AccountView {
                id: UserId::from(Uuid::new_v4()),
                username: "cinephile".to_string(),
                email: "cine@example.com".to_string(),
                name: "Cine Phile".to_string(),
                token_expiration: Some(chrono::Utc::now()),
            },
            access_token: "eyJ.access".to_string(),
            refresh_token: "eyJ.refresh".to_string(),
        }
    }

    async fn call(uc: MockLogin, payload: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_login_user(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_login_user_success() {
        let (status, body) = call(
            MockLogin { result: Ok(session()) },
            serde_json::json!({"username": "cinephile", "password": "popcorn-time"}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "eyJ.access");
        assert_eq!(body["data"]["refresh_token"], "eyJ.refresh");
        assert_eq!(body["data"]["user"]["username"], "cinephile");
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_login_user_invalid_credentials() {
        let (status, body) = call(
            MockLogin {
                result: Err(LoginError::InvalidCredentials),
            },
            serde_json::json!({"username": "cinephile", "password": "nope-nope"}),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_login_user_empty_password() {
        let (status, body) = call(
            MockLogin { result: Ok(session()) },
            serde_json::json!({"username": "cinephile", "password": ""}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_user_missing_field() {
        let (status, _) = call(
            MockLogin { result: Ok(session()) },
            serde_json::json!({"username": "cinephile"}),
        )
        .await;

        assert_eq!(status, 400);
    }

    #[actix_web::test]
    async fn test_login_user_query_error() {
        let (status, body) = call(
            MockLogin {
                result: Err(LoginError::QueryError("pool exhausted".into())),
            },
            serde_json::json!({"username": "cinephile", "password": "popcorn-time"}),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
