pub mod add_membership;
pub mod list_memberships;
pub mod membership_exists;
pub mod remove_membership;

pub use add_membership::{AddMembershipError, AddMembershipUseCase};
pub use list_memberships::{ListMembershipsError, ListMembershipsUseCase};
pub use membership_exists::{MembershipExistsError, MembershipExistsUseCase};
pub use remove_membership::{RemoveMembershipError, RemoveMembershipUseCase};
