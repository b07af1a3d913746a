use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::{
    ListName, MovieList, MovieListItem,
};
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MovieListRepositoryError {
    #[error("List not found")]
    ListNotFound,

    #[error("List belongs to another user")]
    NotOwner,

    #[error("A list with this name already exists")]
    NameTaken,

    #[error("Movie is already in the list")]
    AlreadyInList,

    #[error("Movie is not in the list")]
    ItemNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every mutation of an existing list checks ownership while holding the
/// list row lock.
#[async_trait]
pub trait MovieListRepository: Send + Sync {
    async fn create_list(
        &self,
        owner: UserId,
        name: &ListName,
    ) -> Result<MovieList, MovieListRepositoryError>;

    async fn rename_list(
        &self,
        owner: UserId,
        list_id: Uuid,
        name: &ListName,
    ) -> Result<MovieList, MovieListRepositoryError>;

    async fn delete_list(&self, owner: UserId, list_id: Uuid)
        -> Result<(), MovieListRepositoryError>;

    async fn add_item(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: &MovieId,
    ) -> Result<MovieListItem, MovieListRepositoryError>;

    async fn remove_item(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: &MovieId,
    ) -> Result<(), MovieListRepositoryError>;
}
