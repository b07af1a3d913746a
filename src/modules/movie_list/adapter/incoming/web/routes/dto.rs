use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::movie_list::application::domain::entities::{MovieList, MovieListItem};
use crate::shared::movie_id::RawMovieId;

/// Body of both create and rename.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListNameRequestDto {
    #[schema(example = "Rainy Sunday")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddListItemRequestDto {
    #[schema(value_type = String, example = "603")]
    pub movie_id: Option<RawMovieId>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListItemDto {
    pub id: Uuid,
    #[schema(example = "603")]
    pub movie_id: String,
    pub added_at: DateTime<Utc>,
}

impl From<MovieListItem> for MovieListItemDto {
    fn from(item: MovieListItem) -> Self {
        Self {
            id: item.id,
            movie_id: item.movie_id,
            added_at: item.added_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListDto {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Rainy Sunday")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Oldest first
    pub items: Vec<MovieListItemDto>,
}

impl From<MovieList> for MovieListDto {
    fn from(list: MovieList) -> Self {
        Self {
            id: list.id,
            user_id: list.user_id.value(),
            name: list.name,
            created_at: list.created_at,
            items: list.items.into_iter().map(MovieListItemDto::from).collect(),
        }
    }
}
