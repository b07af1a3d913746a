use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::social::application::domain::entities::{FollowView, PublicUser};

#[derive(Debug, Deserialize, ToSchema)]
pub struct FollowRequestDto {
    /// Id of the user to follow
    pub to_user: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowCreatedDto {
    pub created: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublicUserDto {
    pub id: Uuid,
    #[schema(example = "cinephile")]
    pub username: String,
    #[schema(example = "Agnes Varda")]
    pub name: String,
}

impl From<PublicUser> for PublicUserDto {
    fn from(u: PublicUser) -> Self {
        Self {
            id: u.id.value(),
            username: u.username,
            name: u.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowViewDto {
    pub user: PublicUserDto,
    pub followed_at: DateTime<Utc>,
}

impl From<FollowView> for FollowViewDto {
    fn from(v: FollowView) -> Self {
        Self {
            user: PublicUserDto::from(v.user),
            followed_at: v.followed_at,
        }
    }
}
