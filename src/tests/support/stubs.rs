//! Use cases a handler test does not exercise. Each panics if reached, so a
//! test that forgets to inject the real collaborator fails loudly.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountView, AuthSession, UserId};
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserError, FetchUserProfileUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserRequest,
};
use crate::modules::profile::application::domain::entities::PublicProfile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetPublicProfileUseCase,
};
use crate::modules::review::application::domain::entities::ReviewSummary;
use crate::modules::review::application::ports::incoming::use_cases::{
    DeleteReviewError, DeleteReviewUseCase, GetReviewError, GetReviewUseCase, ListReviewsError,
    ListReviewsUseCase, PatchReviewError, PatchReviewUseCase, ReviewSummaryError,
    ReviewSummaryUseCase, SubmitReviewError, SubmitReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::{
    PatchReviewData, ReviewListFilter, ReviewResult, ReviewView, SubmitReviewData, UpsertOutcome,
};
use crate::shared::movie_id::MovieId;
use crate::shared::pagination::{PageRequest, PageResult};

// ========================= auth =========================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<AccountView, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

// ========================= review =========================

#[derive(Default, Clone)]
pub struct StubSubmitReviewUseCase;

#[async_trait]
impl SubmitReviewUseCase for StubSubmitReviewUseCase {
    async fn execute(&self, _data: SubmitReviewData) -> Result<UpsertOutcome, SubmitReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetReviewUseCase;

#[async_trait]
impl GetReviewUseCase for StubGetReviewUseCase {
    async fn execute(&self, _review_id: Uuid) -> Result<ReviewView, GetReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchReviewUseCase;

#[async_trait]
impl PatchReviewUseCase for StubPatchReviewUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _review_id: Uuid,
        _data: PatchReviewData,
    ) -> Result<ReviewResult, PatchReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteReviewUseCase;

#[async_trait]
impl DeleteReviewUseCase for StubDeleteReviewUseCase {
    async fn execute(&self, _owner: UserId, _review_id: Uuid) -> Result<(), DeleteReviewError> {
        unimplemented!("Not used in this test")
    }
}

/// Always answers with an empty page.
#[derive(Default, Clone)]
pub struct EmptyListReviewsUseCase;

#[async_trait]
impl ListReviewsUseCase for EmptyListReviewsUseCase {
    async fn execute(
        &self,
        _filter: ReviewListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ReviewView>, ListReviewsError> {
        Ok(PageResult::empty(page))
    }
}

#[derive(Default, Clone)]
pub struct StubReviewSummaryUseCase;

#[async_trait]
impl ReviewSummaryUseCase for StubReviewSummaryUseCase {
    async fn execute(&self, _movie_id: MovieId) -> Result<ReviewSummary, ReviewSummaryError> {
        unimplemented!("Not used in this test")
    }
}

// ========================= profile =========================

#[derive(Default, Clone)]
pub struct StubGetPublicProfileUseCase;

#[async_trait]
impl GetPublicProfileUseCase for StubGetPublicProfileUseCase {
    async fn execute(&self, _username: &str) -> Result<PublicProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}
