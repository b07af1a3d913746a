use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::{ListName, MovieList};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateListError {
    #[error("A list with this name already exists")]
    NameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateListUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, name: ListName) -> Result<MovieList, CreateListError>;
}
