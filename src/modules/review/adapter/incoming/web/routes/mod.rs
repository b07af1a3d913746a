mod delete_review;
mod dto;
mod get_review;
mod list_my_reviews;
mod list_reviews;
mod patch_review;
mod review_summary;
mod submit_review;

pub use delete_review::delete_review_handler;
pub use dto::{ReviewDto, ReviewPageDto, ReviewSummaryDto, ReviewViewDto};
pub use get_review::get_review_handler;
pub use list_my_reviews::list_my_reviews_handler;
pub use list_reviews::{list_reviews_handler, ListReviewsQuery};
pub use patch_review::{patch_review_handler, PatchReviewRequestDto};
pub use review_summary::{review_summary_handler, ReviewSummaryQuery};
pub use submit_review::{submit_review_handler, SubmitReviewRequestDto};

pub use delete_review::__path_delete_review_handler;
pub use get_review::__path_get_review_handler;
pub use list_my_reviews::__path_list_my_reviews_handler;
pub use list_reviews::__path_list_reviews_handler;
pub use patch_review::__path_patch_review_handler;
pub use review_summary::__path_review_summary_handler;
pub use submit_review::__path_submit_review_handler;
