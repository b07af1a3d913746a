use actix_web::{delete, get, post, web, Responder};

use super::dto::{
    AddMembershipRequestDto, MembershipCreatedDto, MembershipEntryDto, MembershipExistsDto,
    MembershipExistsQuery,
};
use super::membership_handlers;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Mark a movie as favourite. Adding twice is not an error
#[utoipa::path(
    post,
    path = "/api/favourites",
    tag = "favourites",
    security(("bearer_auth" = [])),
    request_body = AddMembershipRequestDto,
    responses(
        (status = 200, description = "Favourite present", body = inline(SuccessResponse<MembershipCreatedDto>)),
        (status = 400, description = "Invalid movie_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/favourites")]
pub async fn add_favourite_handler(
    user: AuthenticatedUser,
    req: web::Json<AddMembershipRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::add(&data.favourites, user, req.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/api/favourites",
    tag = "favourites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's favourites, newest first", body = inline(SuccessResponse<Vec<MembershipEntryDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/favourites")]
pub async fn list_favourites_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::list(&data.favourites, user).await
}

#[utoipa::path(
    get,
    path = "/api/favourites/exists",
    tag = "favourites",
    security(("bearer_auth" = [])),
    params(MembershipExistsQuery),
    responses(
        (status = 200, description = "Whether the movie is a favourite", body = inline(SuccessResponse<MembershipExistsDto>)),
        (status = 400, description = "Missing movie_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/favourites/exists")]
pub async fn favourite_exists_handler(
    user: AuthenticatedUser,
    query: web::Query<MembershipExistsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::exists(&data.favourites, user, query.into_inner()).await
}

/// Remove a favourite. Removing an absent movie succeeds
#[utoipa::path(
    delete,
    path = "/api/favourites/{movie_id}",
    tag = "favourites",
    security(("bearer_auth" = [])),
    params(("movie_id" = String, Path, description = "Catalogue id")),
    responses(
        (status = 204, description = "Favourite absent"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[delete("/api/favourites/{movie_id}")]
pub async fn remove_favourite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    membership_handlers::remove(&data.favourites, user, &path.into_inner()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::fakes::InMemoryMembership;

    macro_rules! favourites_app {
        ($fake:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_favourites($fake.use_cases())
                            .build(),
                    )
                    .app_data(web::Data::new(test_token_provider()))
                    .service(add_favourite_handler)
                    .service(list_favourites_handler)
                    .service(favourite_exists_handler)
                    .service(remove_favourite_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn add_twice_reports_created_then_not() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);
        let auth = bearer_for(Uuid::new_v4());

        for expected in [true, false] {
            let req = test::TestRequest::post()
                .uri("/api/favourites")
                .insert_header(("Authorization", auth.clone()))
                .set_json(json!({"movie_id": 603}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["data"]["created"], expected);
        }

        assert_eq!(fake.len(), 1);
    }

    #[actix_web::test]
    async fn exists_follows_add_and_remove() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);
        let auth = bearer_for(Uuid::new_v4());

        let probe = |auth: String| {
            test::TestRequest::get()
                .uri("/api/favourites/exists?movie_id=603")
                .insert_header(("Authorization", auth))
                .to_request()
        };

        let body: Value =
            test::read_body_json(test::call_service(&app, probe(auth.clone())).await).await;
        assert_eq!(body["data"]["exists"], false);

        let add = test::TestRequest::post()
            .uri("/api/favourites")
            .insert_header(("Authorization", auth.clone()))
            .set_json(json!({"movie_id": "603"}))
            .to_request();
        test::call_service(&app, add).await;

        let body: Value =
            test::read_body_json(test::call_service(&app, probe(auth.clone())).await).await;
        assert_eq!(body["data"]["exists"], true);

        let remove = test::TestRequest::delete()
            .uri("/api/favourites/603")
            .insert_header(("Authorization", auth.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, remove).await.status().as_u16(), 204);

        let body: Value =
            test::read_body_json(test::call_service(&app, probe(auth)).await).await;
        assert_eq!(body["data"]["exists"], false);
    }

    #[actix_web::test]
    async fn removing_absent_favourite_is_204() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);

        let req = test::TestRequest::delete()
            .uri("/api/favourites/999")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 204);
    }

    #[actix_web::test]
    async fn list_returns_entries() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);
        let auth = bearer_for(Uuid::new_v4());

        for movie in ["603", "604"] {
            let req = test::TestRequest::post()
                .uri("/api/favourites")
                .insert_header(("Authorization", auth.clone()))
                .set_json(json!({ "movie_id": movie }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/favourites")
            .insert_header(("Authorization", auth))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["movie_id"], "604");
    }

    #[actix_web::test]
    async fn blank_movie_id_is_400() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);

        let req = test::TestRequest::post()
            .uri("/api/favourites")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .set_json(json!({"movie_id": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(fake.len(), 0);
    }

    #[actix_web::test]
    async fn exists_without_movie_id_is_400() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/favourites/exists")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn requires_token() {
        let fake = InMemoryMembership::default();
        let app = favourites_app!(fake);

        let req = test::TestRequest::get().uri("/api/favourites").to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 401);
    }
}
