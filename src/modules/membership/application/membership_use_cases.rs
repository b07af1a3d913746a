use std::sync::Arc;

use crate::modules::membership::application::ports::incoming::use_cases::{
    AddMembershipUseCase, ListMembershipsUseCase, MembershipExistsUseCase,
    RemoveMembershipUseCase,
};

/// One instance per `MembershipKind`.
#[derive(Clone)]
pub struct MembershipUseCases {
    pub add: Arc<dyn AddMembershipUseCase + Send + Sync>,
    pub exists: Arc<dyn MembershipExistsUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveMembershipUseCase + Send + Sync>,
    pub list: Arc<dyn ListMembershipsUseCase + Send + Sync>,
}
