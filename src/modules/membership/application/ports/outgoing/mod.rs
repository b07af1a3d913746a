pub mod membership_repository;

pub use membership_repository::{MembershipRepository, MembershipRepositoryError};
