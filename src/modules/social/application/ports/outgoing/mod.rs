pub mod follow_repository;
pub mod social_query;

pub use follow_repository::{FollowRepository, FollowRepositoryError};
pub use social_query::{SocialQuery, SocialQueryError};
