use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{AccountView, UserId},
    ports::outgoing::{user_query::UserQueryResult, UserQuery},
    use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase},
};

/// Backs `GET /api/auth/me`.
pub struct FetchUserProfileService<Q> {
    user_query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

// The password hash stays behind; only the account fields leave.
fn account_view(row: UserQueryResult) -> AccountView {
    AccountView {
        id: UserId::from(row.id),
        username: row.username,
        email: row.email,
        name: row.name,
        token_expiration: row.token_expiration,
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<AccountView, FetchUserError> {
        self.user_query
            .find_by_id(user_id.value())
            .await?
            .map(account_view)
            .ok_or(FetchUserError::UserNotFound(user_id))
    }
}
