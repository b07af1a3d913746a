use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

/// What anyone may see about another user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

/// One end of a follow edge plus when the edge was created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowView {
    pub user: PublicUser,
    pub followed_at: DateTime<Utc>,
}
