use actix_web::{delete, post, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{FollowCreatedDto, FollowRequestDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::incoming::use_cases::{
    FollowUserError, UnfollowUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/social/follow",
    tag = "social",
    security(("bearer_auth" = [])),
    request_body = FollowRequestDto,
    responses(
        (status = 201, description = "Now following", body = inline(SuccessResponse<FollowCreatedDto>)),
        (status = 200, description = "Already following", body = inline(SuccessResponse<FollowCreatedDto>)),
        (status = 400, description = "Missing target, or target is the caller", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[post("/api/social/follow")]
pub async fn follow_user_handler(
    user: AuthenticatedUser,
    req: web::Json<FollowRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(target) = req.to_user else {
        return ApiResponse::validation_error("to_user is required");
    };

    match data
        .social
        .follow
        .execute(user.id(), UserId::from(target))
        .await
    {
        Ok(created) => ApiResponse::created_or_ok(FollowCreatedDto { created }, created),
        Err(FollowUserError::SelfFollow) => {
            ApiResponse::bad_request("SELF_FOLLOW", "You cannot follow yourself")
        }
        Err(FollowUserError::TargetNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FollowUserError::RepositoryError(e)) => {
            error!("Failed follow {} -> {}: {}", user.user_id, target, e);
            ApiResponse::internal_error()
        }
    }
}

/// Stop following a user. Succeeds when no edge exists
#[utoipa::path(
    delete,
    path = "/api/social/unfollow/{user_id}",
    tag = "social",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User to unfollow")),
    responses(
        (status = 204, description = "Not following anymore"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[delete("/api/social/unfollow/{user_id}")]
pub async fn unfollow_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();

    match data
        .social
        .unfollow
        .execute(user.id(), UserId::from(target))
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(UnfollowUserError::RepositoryError(e)) => {
            error!("Failed unfollow {} -> {}: {}", user.user_id, target, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::fakes::InMemorySocialGraph;

    macro_rules! social_app {
        ($graph:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_social($graph.use_cases())
                            .build(),
                    )
                    .app_data(web::Data::new(test_token_provider()))
                    .service(follow_user_handler)
                    .service(unfollow_user_handler),
            )
            .await
        };
    }

    fn follow_req(from: Uuid, body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/social/follow")
            .insert_header(("Authorization", bearer_for(from)))
            .set_json(body)
    }

    #[actix_web::test]
    async fn follow_twice_is_201_then_200() {
        let graph = InMemorySocialGraph::default();
        let alice = graph.register("alice");
        let bob = graph.register("bob");
        let app = social_app!(graph);

        let req = follow_req(alice, json!({"to_user": bob})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["created"], true);

        let req = follow_req(alice, json!({"to_user": bob})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["created"], false);

        assert_eq!(graph.edge_count(), 1);
    }

    #[actix_web::test]
    async fn self_follow_is_400() {
        let graph = InMemorySocialGraph::default();
        let alice = graph.register("alice");
        let app = social_app!(graph);

        let req = follow_req(alice, json!({"to_user": alice})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SELF_FOLLOW");
        assert_eq!(graph.edge_count(), 0);
    }

    #[actix_web::test]
    async fn unknown_target_is_404() {
        let graph = InMemorySocialGraph::default();
        let alice = graph.register("alice");
        let app = social_app!(graph);

        let req = follow_req(alice, json!({"to_user": Uuid::new_v4()})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn missing_target_is_400() {
        let graph = InMemorySocialGraph::default();
        let alice = graph.register("alice");
        let app = social_app!(graph);

        let req = follow_req(alice, json!({})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn unfollow_is_204_even_without_edge() {
        let graph = InMemorySocialGraph::default();
        let alice = graph.register("alice");
        let bob = graph.register("bob");
        let app = social_app!(graph);

        let req = follow_req(alice, json!({"to_user": bob})).to_request();

        test::call_service(&app, req).await;

        for _ in 0..2 {
            let req = test::TestRequest::delete()
                .uri(&format!("/api/social/unfollow/{}", bob))
                .insert_header(("Authorization", bearer_for(alice)))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status().as_u16(), 204);
        }
        assert_eq!(graph.edge_count(), 0);
    }
}
