pub mod delete_review;
pub mod get_review;
pub mod list_reviews;
pub mod patch_review;
pub mod review_summary;
pub mod submit_review;

pub use delete_review::{DeleteReviewError, DeleteReviewUseCase};
pub use get_review::{GetReviewError, GetReviewUseCase};
pub use list_reviews::{ListReviewsError, ListReviewsUseCase};
pub use patch_review::{PatchReviewError, PatchReviewUseCase};
pub use review_summary::{ReviewSummaryError, ReviewSummaryUseCase};
pub use submit_review::{SubmitReviewError, SubmitReviewUseCase};
