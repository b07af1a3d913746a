use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::membership::application::domain::entities::MembershipEntry;
use crate::shared::movie_id::RawMovieId;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMembershipRequestDto {
    /// Catalogue id, string or number
    #[schema(value_type = String, example = "603")]
    pub movie_id: Option<RawMovieId>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MembershipExistsQuery {
    #[param(example = "603")]
    pub movie_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MembershipEntryDto {
    pub id: Uuid,
    #[schema(example = "603")]
    pub movie_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<MembershipEntry> for MembershipEntryDto {
    fn from(e: MembershipEntry) -> Self {
        Self {
            id: e.id,
            movie_id: e.movie_id,
            created_at: e.created_at,
        }
    }
}

/// `created` is false when the movie was already present.
#[derive(Debug, Serialize, ToSchema)]
pub struct MembershipCreatedDto {
    pub created: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MembershipExistsDto {
    pub exists: bool,
}
