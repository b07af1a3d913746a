use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::ReviewDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::domain::entities::Rating;
use crate::modules::review::application::ports::incoming::use_cases::PatchReviewError;
use crate::modules::review::application::ports::outgoing::PatchReviewData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Unknown fields (an attempted `user_id` among them) are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchReviewRequestDto {
    #[serde(default)]
    #[schema(example = 4.0)]
    pub rating: Option<f64>,

    /// Omit to keep, null to clear
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub text: PatchField<String>,
}

impl PatchReviewRequestDto {
    fn into_patch_data(self) -> Result<PatchReviewData, String> {
        let rating = self
            .rating
            .map(Rating::new)
            .transpose()
            .map_err(|e| e.to_string())?;

        Ok(PatchReviewData {
            rating,
            text: self.text,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Edit one's own review
#[utoipa::path(
    patch,
    path = "/api/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = PatchReviewRequestDto,
    responses(
        (status = 200, description = "Review updated", body = inline(SuccessResponse<ReviewDto>)),
        (status = 400, description = "Invalid rating", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Review belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such review", body = ErrorResponse),
    )
)]
#[patch("/api/reviews/{id}")]
pub async fn patch_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchReviewRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let review_id = path.into_inner();

    let patch_data = match req.into_inner().into_patch_data() {
        Ok(d) => d,
        Err(msg) => return ApiResponse::validation_error(&msg),
    };

    match data
        .review
        .patch
        .execute(user.id(), review_id, patch_data)
        .await
    {
        Ok(updated) => ApiResponse::success(ReviewDto::from(updated)),

        Err(PatchReviewError::NotFound) => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found")
        }

        Err(PatchReviewError::NotOwner) => {
            ApiResponse::forbidden("NOT_REVIEW_OWNER", "You can only edit your own reviews")
        }

        Err(PatchReviewError::RepositoryError(e)) => {
            error!("Repository error patching review {}: {}", review_id, e);
            ApiResponse::internal_error()
        }
    }
}
