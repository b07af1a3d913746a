use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::GetPublicProfileUseCase;

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
}
