use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::MovieList;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUserListsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListUserListsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<MovieList>, ListUserListsError>;
}
