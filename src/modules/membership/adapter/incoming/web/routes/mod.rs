mod dto;
mod favourites;
mod membership_handlers;
mod watchlist;

pub use dto::{
    AddMembershipRequestDto, MembershipCreatedDto, MembershipEntryDto, MembershipExistsDto,
    MembershipExistsQuery,
};
pub use favourites::{
    add_favourite_handler, favourite_exists_handler, list_favourites_handler,
    remove_favourite_handler,
};
pub use watchlist::{
    add_watchlist_handler, list_watchlist_handler, remove_watchlist_handler,
    watchlist_exists_handler,
};

pub use favourites::{
    __path_add_favourite_handler, __path_favourite_exists_handler,
    __path_list_favourites_handler, __path_remove_favourite_handler,
};
pub use watchlist::{
    __path_add_watchlist_handler, __path_list_watchlist_handler,
    __path_remove_watchlist_handler, __path_watchlist_exists_handler,
};
