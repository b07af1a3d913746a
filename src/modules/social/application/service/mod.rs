pub mod connections_service;
pub mod follow_service;

pub use connections_service::ConnectionsService;
pub use follow_service::FollowService;
