//! Documentation-only mirrors of the `ApiResponse` envelope.
//!
//! `ApiResponse` itself is generic over any `Serialize` payload and carries
//! both optional halves, which reads poorly in Swagger. Handlers reference
//! these two shapes in `#[utoipa::path]` responses instead.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine code, e.g. `NOT_REVIEW_OWNER` or `LIST_NAME_TAKEN`.
    #[schema(example = "MOVIE_ALREADY_IN_LIST")]
    pub code: String,
    #[schema(example = "Movie is already in this list")]
    pub message: String,
}
