use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PublicProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<PublicProfile, GetProfileError>;
}
