use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{ProfileCounts, PublicProfile};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileCountsDto {
    pub reviews: u64,
    pub lists: u64,
    pub followers: u64,
    pub following: u64,
}

impl From<ProfileCounts> for ProfileCountsDto {
    fn from(c: ProfileCounts) -> Self {
        Self {
            reviews: c.reviews,
            lists: c.lists,
            followers: c.followers,
            following: c.following,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublicProfileDto {
    pub id: Uuid,
    #[schema(example = "cinephile")]
    pub username: String,
    #[schema(example = "Cine Phile")]
    pub name: String,
    pub counts: ProfileCountsDto,
}

impl From<PublicProfile> for PublicProfileDto {
    fn from(p: PublicProfile) -> Self {
        Self {
            id: p.id.value(),
            username: p.username,
            name: p.name,
            counts: p.counts.into(),
        }
    }
}
