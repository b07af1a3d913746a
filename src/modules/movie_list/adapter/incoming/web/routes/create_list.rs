use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::{ListNameRequestDto, MovieListDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::movie_list::application::domain::entities::ListName;
use crate::modules::movie_list::application::ports::incoming::use_cases::CreateListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/lists",
    tag = "lists",
    security(("bearer_auth" = [])),
    request_body = ListNameRequestDto,
    responses(
        (status = 201, description = "List created", body = inline(SuccessResponse<MovieListDto>)),
        (status = 400, description = "Blank or overlong name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Caller already has a list with this name", body = ErrorResponse),
    )
)]
#[post("/api/lists")]
pub async fn create_list_handler(
    user: AuthenticatedUser,
    req: web::Json<ListNameRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let name = match ListName::new(req.name.as_deref().unwrap_or_default()) {
        Ok(n) => n,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.movie_list.create.execute(user.id(), name).await {
        Ok(list) => ApiResponse::created(MovieListDto::from(list)),

        Err(CreateListError::NameTaken) => {
            ApiResponse::conflict("LIST_NAME_TAKEN", "You already have a list with this name")
        }

        Err(CreateListError::RepositoryError(e)) => {
            error!("Failed to create list for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
