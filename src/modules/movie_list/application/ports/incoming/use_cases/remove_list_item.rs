use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveListItemError {
    #[error("List not found")]
    ListNotFound,

    #[error("Only the owner may change this list")]
    NotOwner,

    #[error("Movie is not in the list")]
    ItemNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: MovieId,
    ) -> Result<(), RemoveListItemError>;
}
