use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Favourites and the watchlist share one set of rules: a per-user set of
/// movies with idempotent add and remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipKind {
    Favourite,
    Watchlist,
}

impl MembershipKind {
    pub fn table(&self) -> &'static str {
        match self {
            MembershipKind::Favourite => "favourites",
            MembershipKind::Watchlist => "watchlist_items",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MembershipKind::Favourite => "favourite",
            MembershipKind::Watchlist => "watchlist item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipEntry {
    pub id: Uuid,
    pub movie_id: String,
    pub created_at: DateTime<Utc>,
}
