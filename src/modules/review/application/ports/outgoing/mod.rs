pub mod review_query;
pub mod review_repository;

pub use review_query::{RatingTotals, ReviewListFilter, ReviewQuery, ReviewQueryError, ReviewView};
pub use review_repository::{
    PatchReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult, SubmitReviewData,
    UpsertOutcome,
};
