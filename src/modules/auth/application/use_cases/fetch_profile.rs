use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{AccountView, UserId},
    ports::outgoing::user_query::UserQueryError,
};

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

/// Resolves the authenticated caller's own account.
#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<AccountView, FetchUserError>;
}
