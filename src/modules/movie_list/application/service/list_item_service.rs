use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::MovieListItem;
use crate::modules::movie_list::application::ports::incoming::use_cases::{
    AddListItemError, AddListItemUseCase, RemoveListItemError, RemoveListItemUseCase,
};
use crate::modules::movie_list::application::ports::outgoing::{
    MovieListRepository, MovieListRepositoryError,
};
use crate::shared::movie_id::MovieId;

pub struct ListItemService<R>
where
    R: MovieListRepository,
{
    repository: R,
}

impl<R> ListItemService<R>
where
    R: MovieListRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddListItemUseCase for ListItemService<R>
where
    R: MovieListRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: MovieId,
    ) -> Result<MovieListItem, AddListItemError> {
        let item = self
            .repository
            .add_item(owner, list_id, &movie_id)
            .await
            .map_err(|e| match e {
                MovieListRepositoryError::ListNotFound => AddListItemError::ListNotFound,
                MovieListRepositoryError::NotOwner => AddListItemError::NotOwner,
                MovieListRepositoryError::AlreadyInList => AddListItemError::AlreadyInList,
                other => AddListItemError::RepositoryError(other.to_string()),
            })?;

        info!(%list_id, %movie_id, "Movie added to list");
        Ok(item)
    }
}

#[async_trait]
impl<R> RemoveListItemUseCase for ListItemService<R>
where
    R: MovieListRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: MovieId,
    ) -> Result<(), RemoveListItemError> {
        self.repository
            .remove_item(owner, list_id, &movie_id)
            .await
            .map_err(|e| match e {
                MovieListRepositoryError::ListNotFound => RemoveListItemError::ListNotFound,
                MovieListRepositoryError::NotOwner => RemoveListItemError::NotOwner,
                MovieListRepositoryError::ItemNotFound => RemoveListItemError::ItemNotFound,
                other => RemoveListItemError::RepositoryError(other.to_string()),
            })
    }
}
