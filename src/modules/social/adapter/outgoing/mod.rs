pub mod follow_repository_postgres;
pub mod social_query_postgres;

pub use follow_repository_postgres::FollowRepositoryPostgres;
pub use social_query_postgres::SocialQueryPostgres;
