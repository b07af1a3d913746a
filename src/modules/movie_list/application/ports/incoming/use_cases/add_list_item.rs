use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::MovieListItem;
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddListItemError {
    #[error("List not found")]
    ListNotFound,

    #[error("Only the owner may change this list")]
    NotOwner,

    #[error("Movie is already in the list")]
    AlreadyInList,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: MovieId,
    ) -> Result<MovieListItem, AddListItemError>;
}
