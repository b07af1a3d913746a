pub mod favourites;
pub mod watchlist_items;
