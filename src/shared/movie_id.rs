use serde::{Deserialize, Serialize};

pub const MOVIE_ID_MAX_LEN: usize = 64;

/// Identifier of a movie in the external catalogue. Opaque to this service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MovieIdError {
    #[error("movie_id is required")]
    Missing,

    #[error("movie_id must be at most 64 characters")]
    TooLong,
}

impl MovieId {
    pub fn parse(raw: &str) -> Result<Self, MovieIdError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(MovieIdError::Missing);
        }
        if trimmed.chars().count() > MOVIE_ID_MAX_LEN {
            return Err(MovieIdError::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Request bodies may omit the field or send the catalogue id as a number.
    pub fn from_raw(raw: Option<RawMovieId>) -> Result<Self, MovieIdError> {
        match raw {
            None => Err(MovieIdError::Missing),
            Some(RawMovieId::Text(s)) => Self::parse(&s),
            Some(RawMovieId::Number(n)) => Self::parse(&n.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMovieId {
    Text(String),
    Number(u64),
}
