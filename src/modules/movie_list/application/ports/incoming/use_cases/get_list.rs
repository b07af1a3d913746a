use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie_list::application::domain::entities::MovieList;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetListError {
    #[error("List not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Lists are publicly readable.
#[async_trait]
pub trait GetListUseCase: Send + Sync {
    async fn execute(&self, list_id: Uuid) -> Result<MovieList, GetListError>;
}
