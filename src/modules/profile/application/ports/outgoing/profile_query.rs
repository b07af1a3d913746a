use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PublicProfile;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<PublicProfile>, ProfileQueryError>;
}
