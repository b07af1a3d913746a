use actix_web::HttpResponse;
use tracing::error;

use super::dto::{
    AddMembershipRequestDto, MembershipCreatedDto, MembershipEntryDto, MembershipExistsDto,
    MembershipExistsQuery,
};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::membership::application::membership_use_cases::MembershipUseCases;
use crate::shared::api::ApiResponse;
use crate::shared::movie_id::MovieId;

// Favourites and watchlist routes differ only in path and use-case set.

pub(super) async fn add(
    use_cases: &MembershipUseCases,
    user: AuthenticatedUser,
    body: AddMembershipRequestDto,
) -> HttpResponse {
    let movie_id = match MovieId::from_raw(body.movie_id) {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match use_cases.add.execute(user.id(), movie_id).await {
        Ok(created) => ApiResponse::success(MembershipCreatedDto { created }),
        Err(e) => {
            error!("Failed to add movie for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn exists(
    use_cases: &MembershipUseCases,
    user: AuthenticatedUser,
    query: MembershipExistsQuery,
) -> HttpResponse {
    let movie_id = match MovieId::parse(query.movie_id.as_deref().unwrap_or_default()) {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match use_cases.exists.execute(user.id(), movie_id).await {
        Ok(exists) => ApiResponse::success(MembershipExistsDto { exists }),
        Err(e) => {
            error!("Failed membership probe for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn remove(
    use_cases: &MembershipUseCases,
    user: AuthenticatedUser,
    raw_movie_id: &str,
) -> HttpResponse {
    let movie_id = match MovieId::parse(raw_movie_id) {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match use_cases.remove.execute(user.id(), movie_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => {
            error!("Failed to remove movie for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn list(use_cases: &MembershipUseCases, user: AuthenticatedUser) -> HttpResponse {
    match use_cases.list.execute(user.id()).await {
        Ok(entries) => ApiResponse::success(
            entries
                .into_iter()
                .map(MembershipEntryDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to list memberships of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
