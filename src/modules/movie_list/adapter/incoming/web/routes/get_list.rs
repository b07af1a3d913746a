use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::MovieListDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::movie_list::application::ports::incoming::use_cases::GetListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/lists/{id}",
    tag = "lists",
    params(("id" = Uuid, Path, description = "List id")),
    responses(
        (status = 200, description = "List with items", body = inline(SuccessResponse<MovieListDto>)),
        (status = 404, description = "No such list", body = ErrorResponse),
    )
)]
#[get("/api/lists/{id}")]
pub async fn get_list_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let list_id = path.into_inner();

    match data.movie_list.get.execute(list_id).await {
        Ok(list) => ApiResponse::success(MovieListDto::from(list)),
        Err(GetListError::NotFound) => ApiResponse::not_found("LIST_NOT_FOUND", "List not found"),
        Err(GetListError::QueryFailed(e)) => {
            error!("Failed to load list {}: {}", list_id, e);
            ApiResponse::internal_error()
        }
    }
}
