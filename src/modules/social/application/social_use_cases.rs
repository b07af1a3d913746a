use std::sync::Arc;

use crate::modules::social::application::ports::incoming::use_cases::{
    FollowUserUseCase, ListFollowersUseCase, ListFollowingUseCase, ListFriendsUseCase,
    UnfollowUserUseCase,
};

#[derive(Clone)]
pub struct SocialUseCases {
    pub follow: Arc<dyn FollowUserUseCase + Send + Sync>,
    pub unfollow: Arc<dyn UnfollowUserUseCase + Send + Sync>,
    pub followers: Arc<dyn ListFollowersUseCase + Send + Sync>,
    pub following: Arc<dyn ListFollowingUseCase + Send + Sync>,
    pub friends: Arc<dyn ListFriendsUseCase + Send + Sync>,
}
