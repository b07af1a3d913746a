use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountView, AuthSession};

/// The caller's own account.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDto {
    pub id: Uuid,
    #[schema(example = "cinephile")]
    pub username: String,
    #[schema(example = "cine@example.com")]
    pub email: String,
    #[schema(example = "Cine Phile")]
    pub name: String,
    /// End of the current session window
    pub token_expiration: Option<DateTime<Utc>>,
}

impl From<AccountView> for AccountDto {
    fn from(view: AccountView) -> Self {
        Self {
            id: view.id.value(),
            username: view.username,
            email: view.email,
            name: view.name,
            token_expiration: view.token_expiration,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthSessionDto {
    pub user: AccountDto,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<AuthSession> for AuthSessionDto {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user.into(),
            access_token: session.access_token,
            refresh_token: session.refresh_token,
        }
    }
}
