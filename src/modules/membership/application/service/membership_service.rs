use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::domain::entities::UserId;
use crate::modules::membership::application::domain::entities::{MembershipEntry, MembershipKind};
use crate::modules::membership::application::ports::incoming::use_cases::{
    AddMembershipError, AddMembershipUseCase, ListMembershipsError, ListMembershipsUseCase,
    MembershipExistsError, MembershipExistsUseCase, RemoveMembershipError,
    RemoveMembershipUseCase,
};
use crate::modules::membership::application::ports::outgoing::{
    MembershipRepository, MembershipRepositoryError,
};
use crate::shared::movie_id::MovieId;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
// One service per kind serves all four membership use cases.
//

pub struct MembershipService<R>
where
    R: MembershipRepository,
{
    kind: MembershipKind,
    repository: R,
}

impl<R> MembershipService<R>
where
    R: MembershipRepository,
{
    pub fn new(kind: MembershipKind, repository: R) -> Self {
        Self { kind, repository }
    }
}

fn message(e: MembershipRepositoryError) -> String {
    match e {
        MembershipRepositoryError::DatabaseError(msg) => msg,
    }
}

#[async_trait]
impl<R> AddMembershipUseCase for MembershipService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, movie_id: MovieId) -> Result<bool, AddMembershipError> {
        let created = self
            .repository
            .add(self.kind, user, &movie_id)
            .await
            .map_err(|e| AddMembershipError::RepositoryError(message(e)))?;

        if created {
            info!(user_id = %user, %movie_id, "Added {}", self.kind.label());
        } else {
            debug!(user_id = %user, %movie_id, "{} already present", self.kind.label());
        }
        Ok(created)
    }
}

#[async_trait]
impl<R> MembershipExistsUseCase for MembershipService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        movie_id: MovieId,
    ) -> Result<bool, MembershipExistsError> {
        self.repository
            .exists(self.kind, user, &movie_id)
            .await
            .map_err(|e| MembershipExistsError::RepositoryError(message(e)))
    }
}

#[async_trait]
impl<R> RemoveMembershipUseCase for MembershipService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, movie_id: MovieId) -> Result<(), RemoveMembershipError> {
        self.repository
            .remove(self.kind, user, &movie_id)
            .await
            .map_err(|e| RemoveMembershipError::RepositoryError(message(e)))
    }
}

#[async_trait]
impl<R> ListMembershipsUseCase for MembershipService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<MembershipEntry>, ListMembershipsError> {
        self.repository
            .list(self.kind, user)
            .await
            .map_err(|e| ListMembershipsError::RepositoryError(message(e)))
    }
}
