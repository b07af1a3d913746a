use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::movie_list::application::ports::incoming::use_cases::DeleteListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a list together with its items
#[utoipa::path(
    delete,
    path = "/api/lists/{id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "List id")),
    responses(
        (status = 204, description = "List deleted"),
        (status = 403, description = "List belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such list", body = ErrorResponse),
    )
)]
#[delete("/api/lists/{id}")]
pub async fn delete_list_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();

    match data.movie_list.delete.execute(user.id(), list_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteListError::NotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }
        Err(DeleteListError::NotOwner) => {
            ApiResponse::forbidden("NOT_LIST_OWNER", "Only the owner may delete this list")
        }
        Err(DeleteListError::RepositoryError(e)) => {
            error!("Failed to delete list {}: {}", list_id, e);
            ApiResponse::internal_error()
        }
    }
}
