use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::membership::application::domain::entities::{MembershipEntry, MembershipKind};
use crate::shared::movie_id::MovieId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Get-or-create. `true` when a row was inserted.
    async fn add(
        &self,
        kind: MembershipKind,
        user: UserId,
        movie_id: &MovieId,
    ) -> Result<bool, MembershipRepositoryError>;

    async fn exists(
        &self,
        kind: MembershipKind,
        user: UserId,
        movie_id: &MovieId,
    ) -> Result<bool, MembershipRepositoryError>;

    /// Removing an absent row is not an error.
    async fn remove(
        &self,
        kind: MembershipKind,
        user: UserId,
        movie_id: &MovieId,
    ) -> Result<(), MembershipRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        kind: MembershipKind,
        user: UserId,
    ) -> Result<Vec<MembershipEntry>, MembershipRepositoryError>;
}
