use std::sync::Arc;

use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase, login_user::ILoginUserUseCase,
    refresh_token::IRefreshTokenUseCase, register_user::IRegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
}
