use serde::Serialize;

use crate::shared::movie_id::MovieId;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Stored rating of a review submitted without stars.
pub const UNRATED: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("rating must be a number between 1 and 5")]
    OutOfRange,
}

/// Star rating supplied by a reviewer, always within [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Rating aggregate for one movie. Unrated reviews count with a rating of 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub movie_id: String,
    pub count: u64,
    pub average: f64,
}

impl ReviewSummary {
    pub fn from_totals(movie_id: MovieId, count: u64, rating_sum: f64) -> Self {
        let average = if count == 0 {
            0.0
        } else {
            round_to_tenth(rating_sum / count as f64)
        };

        Self {
            movie_id: movie_id.into_inner(),
            count,
            average,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
