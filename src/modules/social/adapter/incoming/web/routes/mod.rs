mod connections;
mod dto;
mod follow_user;

pub use connections::{followers_handler, following_handler, friends_handler};
pub use dto::{FollowCreatedDto, FollowRequestDto, FollowViewDto, PublicUserDto};
pub use follow_user::{follow_user_handler, unfollow_user_handler};

pub use connections::{__path_followers_handler, __path_following_handler, __path_friends_handler};
pub use follow_user::{__path_follow_user_handler, __path_unfollow_user_handler};
