use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::MovieList;
use crate::modules::movie_list::application::ports::incoming::use_cases::{
    GetListError, GetListUseCase, ListUserListsError, ListUserListsUseCase,
};
use crate::modules::movie_list::application::ports::outgoing::MovieListQuery;

pub struct ListReadService<Q>
where
    Q: MovieListQuery,
{
    query: Q,
}

impl<Q> ListReadService<Q>
where
    Q: MovieListQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetListUseCase for ListReadService<Q>
where
    Q: MovieListQuery + Send + Sync,
{
    async fn execute(&self, list_id: Uuid) -> Result<MovieList, GetListError> {
        self.query
            .find_by_id(list_id)
            .await
            .map_err(|e| GetListError::QueryFailed(e.to_string()))?
            .ok_or(GetListError::NotFound)
    }
}

#[async_trait]
impl<Q> ListUserListsUseCase for ListReadService<Q>
where
    Q: MovieListQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<MovieList>, ListUserListsError> {
        self.query
            .lists_of(owner)
            .await
            .map_err(|e| ListUserListsError::QueryFailed(e.to_string()))
    }
}
