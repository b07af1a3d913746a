use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteListError {
    #[error("List not found")]
    NotFound,

    #[error("Only the owner may delete this list")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteListUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, list_id: Uuid) -> Result<(), DeleteListError>;
}
