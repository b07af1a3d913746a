use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::membership::application::domain::entities::MembershipEntry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMembershipsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListMembershipsUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<Vec<MembershipEntry>, ListMembershipsError>;
}
