use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::ports::incoming::use_cases::DeleteReviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete one's own review
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Review belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such review", body = ErrorResponse),
    )
)]
#[delete("/api/reviews/{id}")]
pub async fn delete_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let review_id = path.into_inner();

    match data.review.delete.execute(user.id(), review_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteReviewError::NotFound) => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found")
        }

        Err(DeleteReviewError::NotOwner) => {
            ApiResponse::forbidden("NOT_REVIEW_OWNER", "You can only delete your own reviews")
        }

        Err(DeleteReviewError::RepositoryError(e)) => {
            error!("Repository error deleting review {}: {}", review_id, e);
            ApiResponse::internal_error()
        }
    }
}
