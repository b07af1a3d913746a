use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{ListNameRequestDto, MovieListDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::movie_list::application::domain::entities::ListName;
use crate::modules::movie_list::application::ports::incoming::use_cases::RenameListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    patch,
    path = "/api/lists/{id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "List id")),
    request_body = ListNameRequestDto,
    responses(
        (status = 200, description = "List renamed", body = inline(SuccessResponse<MovieListDto>)),
        (status = 400, description = "Blank or overlong name", body = ErrorResponse),
        (status = 403, description = "List belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such list", body = ErrorResponse),
        (status = 409, description = "Name already used by another of the caller's lists", body = ErrorResponse),
    )
)]
#[patch("/api/lists/{id}")]
pub async fn rename_list_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ListNameRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();
    let name = match ListName::new(req.name.as_deref().unwrap_or_default()) {
        Ok(n) => n,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.movie_list.rename.execute(user.id(), list_id, name).await {
        Ok(list) => ApiResponse::success(MovieListDto::from(list)),
        Err(RenameListError::NotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }
        Err(RenameListError::NotOwner) => {
            ApiResponse::forbidden("NOT_LIST_OWNER", "Only the owner may change this list")
        }
        Err(RenameListError::NameTaken) => {
            ApiResponse::conflict("LIST_NAME_TAKEN", "You already have a list with this name")
        }
        Err(RenameListError::RepositoryError(e)) => {
            error!("Failed to rename list {}: {}", list_id, e);
            ApiResponse::internal_error()
        }
    }
}
