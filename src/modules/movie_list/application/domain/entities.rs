use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const LIST_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListNameError {
    #[error("List name cannot be empty")]
    Empty,

    #[error("List name must be at most 100 characters")]
    TooLong,
}

/// Trimmed, non-empty list name. Unique per owner at the store level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListName(String);

impl ListName {
    pub fn new(raw: &str) -> Result<Self, ListNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ListNameError::Empty);
        }
        if trimmed.chars().count() > LIST_NAME_MAX_LEN {
            return Err(ListNameError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieListItem {
    pub id: Uuid,
    pub movie_id: String,
    pub added_at: DateTime<Utc>,
}

/// A list with its items in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieList {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<MovieListItem>,
}
