use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase, login_user::ILoginUserUseCase,
    refresh_token::IRefreshTokenUseCase, register_user::IRegisterUserUseCase,
};
use crate::modules::membership::application::membership_use_cases::MembershipUseCases;
use crate::modules::movie_list::application::movie_list_use_cases::MovieListUseCases;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::review::application::ports::incoming::use_cases::{
    DeleteReviewUseCase, GetReviewUseCase, ListReviewsUseCase, PatchReviewUseCase,
    ReviewSummaryUseCase, SubmitReviewUseCase,
};
use crate::modules::review::application::review_use_cases::ReviewUseCases;
use crate::modules::social::application::social_use_cases::SocialUseCases;
use crate::tests::support::fakes::{
    InMemoryMembership, InMemoryMovieLists, InMemorySocialGraph, KnownUsers,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub or an empty fake.
/// Tests swap in the collaborators they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    review: ReviewUseCases,
    favourites: MembershipUseCases,
    watchlist: MembershipUseCases,
    movie_list: MovieListUseCases,
    social: SocialUseCases,
    profile: ProfileUseCases,
    user_identity_resolver: UserIdentityResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                fetch_profile: Arc::new(StubFetchUserProfileUseCase),
                refresh: Arc::new(StubRefreshTokenUseCase),
            },
            review: ReviewUseCases {
                submit: Arc::new(StubSubmitReviewUseCase),
                get: Arc::new(StubGetReviewUseCase),
                patch: Arc::new(StubPatchReviewUseCase),
                delete: Arc::new(StubDeleteReviewUseCase),
                list: Arc::new(EmptyListReviewsUseCase),
                summary: Arc::new(StubReviewSummaryUseCase),
            },
            favourites: InMemoryMembership::default().use_cases(),
            watchlist: InMemoryMembership::default().use_cases(),
            movie_list: InMemoryMovieLists::default().use_cases(),
            social: InMemorySocialGraph::default().use_cases(),
            profile: ProfileUseCases {
                get: Arc::new(StubGetPublicProfileUseCase),
            },
            user_identity_resolver: UserIdentityResolver::new(Arc::new(KnownUsers::default())),
        }
    }
}

impl TestAppStateBuilder {
    // ---------------- auth ----------------

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_user_identity_resolver(mut self, resolver: UserIdentityResolver) -> Self {
        self.user_identity_resolver = resolver;
        self
    }

    // ---------------- reviews ----------------

    pub fn with_submit_review(
        mut self,
        uc: impl SubmitReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.submit = Arc::new(uc);
        self
    }

    pub fn with_get_review(mut self, uc: impl GetReviewUseCase + Send + Sync + 'static) -> Self {
        self.review.get = Arc::new(uc);
        self
    }

    pub fn with_patch_review(mut self, uc: impl PatchReviewUseCase + Send + Sync + 'static) -> Self {
        self.review.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_review(
        mut self,
        uc: impl DeleteReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.delete = Arc::new(uc);
        self
    }

    pub fn with_list_reviews(mut self, uc: impl ListReviewsUseCase + Send + Sync + 'static) -> Self {
        self.review.list = Arc::new(uc);
        self
    }

    pub fn with_review_summary(
        mut self,
        uc: impl ReviewSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.summary = Arc::new(uc);
        self
    }

    // ---------------- grouped modules ----------------

    pub fn with_favourites(mut self, use_cases: MembershipUseCases) -> Self {
        self.favourites = use_cases;
        self
    }

    pub fn with_watchlist(mut self, use_cases: MembershipUseCases) -> Self {
        self.watchlist = use_cases;
        self
    }

    pub fn with_movie_list(mut self, use_cases: MovieListUseCases) -> Self {
        self.movie_list = use_cases;
        self
    }

    pub fn with_social(mut self, use_cases: SocialUseCases) -> Self {
        self.social = use_cases;
        self
    }

    pub fn with_profile(mut self, use_cases: ProfileUseCases) -> Self {
        self.profile = use_cases;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            review: self.review,
            favourites: self.favourites,
            watchlist: self.watchlist,
            movie_list: self.movie_list,
            social: self.social,
            profile: self.profile,
            user_identity_resolver: self.user_identity_resolver,
        })
    }
}
