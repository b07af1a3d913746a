use std::sync::Arc;

use crate::modules::review::application::ports::incoming::use_cases::{
    DeleteReviewUseCase, GetReviewUseCase, ListReviewsUseCase, PatchReviewUseCase,
    ReviewSummaryUseCase, SubmitReviewUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub submit: Arc<dyn SubmitReviewUseCase + Send + Sync>,
    pub get: Arc<dyn GetReviewUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
    pub list: Arc<dyn ListReviewsUseCase + Send + Sync>,
    pub summary: Arc<dyn ReviewSummaryUseCase + Send + Sync>,
}
