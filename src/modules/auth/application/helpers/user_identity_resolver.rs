use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for ResolveUserIdError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::DatabaseError(msg) => ResolveUserIdError::RepositoryError(msg),
        }
    }
}

/// Turns the `{username}` of a public URL into the id every store keys on.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    /// `None` for blank or unknown names. Blank names skip the store.
    pub async fn lookup(&self, username: &str) -> Result<Option<UserId>, ResolveUserIdError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(None);
        }

        let found = self.user_query.find_by_username(username).await?;
        Ok(found.map(|user| UserId::from(user.id)))
    }

    pub async fn by_username(&self, username: &str) -> Result<UserId, ResolveUserIdError> {
        self.lookup(username)
            .await?
            .ok_or(ResolveUserIdError::NotFound)
    }
}
