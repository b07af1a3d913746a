pub mod membership_repository_postgres;
pub mod sea_orm_entity;

pub use membership_repository_postgres::MembershipRepositoryPostgres;
