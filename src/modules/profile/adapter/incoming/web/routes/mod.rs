mod dto;
mod get_profile;
mod profile_tabs;

pub use dto::{ProfileCountsDto, PublicProfileDto};
pub use get_profile::get_profile_handler;
pub use profile_tabs::{
    user_favourites_handler, user_lists_handler, user_reviews_handler, user_watchlist_handler,
};

pub use get_profile::__path_get_profile_handler;
pub use profile_tabs::{
    __path_user_favourites_handler, __path_user_lists_handler, __path_user_reviews_handler,
    __path_user_watchlist_handler,
};
