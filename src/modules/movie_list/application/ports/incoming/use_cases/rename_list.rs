use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::{ListName, MovieList};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RenameListError {
    #[error("List not found")]
    NotFound,

    #[error("Only the owner may rename this list")]
    NotOwner,

    #[error("A list with this name already exists")]
    NameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RenameListUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        name: ListName,
    ) -> Result<MovieList, RenameListError>;
}
