use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileCounts {
    pub reviews: u64,
    pub lists: u64,
    pub followers: u64,
    pub following: u64,
}

/// Public face of an account. Email and session data never leave the auth module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicProfile {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub counts: ProfileCounts,
}
