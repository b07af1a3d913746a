use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::{ListName, MovieList};
use crate::modules::movie_list::application::ports::incoming::use_cases::{
    CreateListError, CreateListUseCase, DeleteListError, DeleteListUseCase, RenameListError,
    RenameListUseCase,
};
use crate::modules::movie_list::application::ports::outgoing::{
    MovieListRepository, MovieListRepositoryError,
};

/// Create, rename and delete of whole lists.
pub struct ListManagementService<R>
where
    R: MovieListRepository,
{
    repository: R,
}

impl<R> ListManagementService<R>
where
    R: MovieListRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateListUseCase for ListManagementService<R>
where
    R: MovieListRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, name: ListName) -> Result<MovieList, CreateListError> {
        let list = self
            .repository
            .create_list(owner, &name)
            .await
            .map_err(|e| match e {
                MovieListRepositoryError::NameTaken => CreateListError::NameTaken,
                other => CreateListError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %owner, list_id = %list.id, "Movie list created");
        Ok(list)
    }
}

#[async_trait]
impl<R> RenameListUseCase for ListManagementService<R>
where
    R: MovieListRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        name: ListName,
    ) -> Result<MovieList, RenameListError> {
        self.repository
            .rename_list(owner, list_id, &name)
            .await
            .map_err(|e| match e {
                MovieListRepositoryError::ListNotFound => RenameListError::NotFound,
                MovieListRepositoryError::NotOwner => RenameListError::NotOwner,
                MovieListRepositoryError::NameTaken => RenameListError::NameTaken,
                other => RenameListError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteListUseCase for ListManagementService<R>
where
    R: MovieListRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, list_id: Uuid) -> Result<(), DeleteListError> {
        self.repository
            .delete_list(owner, list_id)
            .await
            .map_err(|e| match e {
                MovieListRepositoryError::ListNotFound => DeleteListError::NotFound,
                MovieListRepositoryError::NotOwner => DeleteListError::NotOwner,
                other => DeleteListError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %owner, %list_id, "Movie list deleted");
        Ok(())
    }
}
