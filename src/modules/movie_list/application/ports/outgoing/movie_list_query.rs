use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::MovieList;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieListQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MovieListQuery: Send + Sync {
    async fn find_by_id(&self, list_id: Uuid) -> Result<Option<MovieList>, MovieListQueryError>;

    /// Newest list first.
    async fn lists_of(&self, owner: UserId) -> Result<Vec<MovieList>, MovieListQueryError>;
}
