pub mod delete_review_service;
pub mod get_review_service;
pub mod list_reviews_service;
pub mod patch_review_service;
pub mod review_summary_service;
pub mod submit_review_service;

pub use delete_review_service::DeleteReviewService;
pub use get_review_service::GetReviewService;
pub use list_reviews_service::ListReviewsService;
pub use patch_review_service::PatchReviewService;
pub use review_summary_service::ReviewSummaryService;
pub use submit_review_service::SubmitReviewService;
