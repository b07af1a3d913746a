pub mod follow_user;
pub mod list_connections;
pub mod unfollow_user;

pub use follow_user::{FollowUserError, FollowUserUseCase};
pub use list_connections::{
    ListConnectionsError, ListFollowersUseCase, ListFollowingUseCase, ListFriendsUseCase,
};
pub use unfollow_user::{UnfollowUserError, UnfollowUserUseCase};
