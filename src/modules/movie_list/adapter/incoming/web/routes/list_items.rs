use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{AddListItemRequestDto, MovieListItemDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::movie_list::application::ports::incoming::use_cases::{
    AddListItemError, RemoveListItemError,
};
use crate::shared::api::ApiResponse;
use crate::shared::movie_id::{MovieId, MovieIdError};
use crate::AppState;

async fn add_item(
    data: &AppState,
    user: AuthenticatedUser,
    list_id: Uuid,
    movie_id: Result<MovieId, MovieIdError>,
) -> HttpResponse {
    let movie_id = match movie_id {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.movie_list.add_item.execute(user.id(), list_id, movie_id).await {
        Ok(item) => ApiResponse::created(MovieListItemDto::from(item)),
        Err(AddListItemError::ListNotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }
        Err(AddListItemError::NotOwner) => {
            ApiResponse::forbidden("NOT_LIST_OWNER", "Only the owner may change this list")
        }
        Err(AddListItemError::AlreadyInList) => {
            ApiResponse::conflict("MOVIE_ALREADY_IN_LIST", "Movie is already in the list")
        }
        Err(AddListItemError::RepositoryError(e)) => {
            error!("Failed to add movie to list {}: {}", list_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/lists/{id}/items",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "List id")),
    request_body = AddListItemRequestDto,
    responses(
        (status = 201, description = "Movie added", body = inline(SuccessResponse<MovieListItemDto>)),
        (status = 400, description = "Invalid movie_id", body = ErrorResponse),
        (status = 403, description = "List belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such list", body = ErrorResponse),
        (status = 409, description = "Movie already in the list", body = ErrorResponse),
    )
)]
#[post("/api/lists/{id}/items")]
pub async fn add_list_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddListItemRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let movie_id = MovieId::from_raw(req.into_inner().movie_id);
    add_item(&data, user, path.into_inner(), movie_id).await
}

/// Same as `POST /api/lists/{id}/items` with the movie in the path
#[utoipa::path(
    post,
    path = "/api/lists/{id}/items/{movie_id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "List id"),
        ("movie_id" = String, Path, description = "Catalogue id"),
    ),
    responses(
        (status = 201, description = "Movie added", body = inline(SuccessResponse<MovieListItemDto>)),
        (status = 403, description = "List belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such list", body = ErrorResponse),
        (status = 409, description = "Movie already in the list", body = ErrorResponse),
    )
)]
#[post("/api/lists/{id}/items/{movie_id}")]
pub async fn add_list_item_by_path_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list_id, raw_movie_id) = path.into_inner();
    add_item(&data, user, list_id, MovieId::parse(&raw_movie_id)).await
}

#[utoipa::path(
    delete,
    path = "/api/lists/{id}/items/{movie_id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "List id"),
        ("movie_id" = String, Path, description = "Catalogue id"),
    ),
    responses(
        (status = 204, description = "Movie removed"),
        (status = 403, description = "List belongs to someone else", body = ErrorResponse),
        (status = 404, description = "No such list, or movie not in it", body = ErrorResponse),
    )
)]
#[delete("/api/lists/{id}/items/{movie_id}")]
pub async fn remove_list_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list_id, raw_movie_id) = path.into_inner();
    let movie_id = match MovieId::parse(&raw_movie_id) {
        Ok(id) => id,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .movie_list
        .remove_item
        .execute(user.id(), list_id, movie_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(RemoveListItemError::ListNotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }
        Err(RemoveListItemError::ItemNotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Movie is not in the list")
        }
        Err(RemoveListItemError::NotOwner) => {
            ApiResponse::forbidden("NOT_LIST_OWNER", "Only the owner may change this list")
        }
        Err(RemoveListItemError::RepositoryError(e)) => {
            error!("Failed to remove movie from list {}: {}", list_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::fakes::InMemoryMovieLists;

    macro_rules! items_app {
        ($fake:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_movie_list($fake.use_cases())
                            .build(),
                    )
                    .app_data(web::Data::new(test_token_provider()))
                    .service(add_list_item_handler)
                    .service(add_list_item_by_path_handler)
                    .service(remove_list_item_handler),
            )
            .await
        };
    }

    fn movies_of(fake: &InMemoryMovieLists, list_id: Uuid) -> Vec<String> {
        fake.get(list_id)
            .unwrap()
            .items
            .into_iter()
            .map(|i| i.movie_id)
            .collect()
    }

    #[actix_web::test]
    async fn owner_adds_by_body_and_by_path() {
        let fake = InMemoryMovieLists::default();
        let owner = Uuid::new_v4();
        let list_id = fake.seed(UserId::from(owner), "Noir", &[]);
        let app = items_app!(fake);

        let req = test::TestRequest::post()
            .uri(&format!("/api/lists/{}/items", list_id))
            .insert_header(("Authorization", bearer_for(owner)))
            .set_json(json!({"movie_id": 289}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["movie_id"], "289");

        let req = test::TestRequest::post()
            .uri(&format!("/api/lists/{}/items/1945", list_id))
            .insert_header(("Authorization", bearer_for(owner)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);

        assert_eq!(movies_of(&fake, list_id), vec!["289", "1945"]);
    }

    #[actix_web::test]
    async fn duplicate_item_is_409_and_list_unchanged() {
        let fake = InMemoryMovieLists::default();
        let owner = Uuid::new_v4();
        let list_id = fake.seed(UserId::from(owner), "Noir", &["289"]);
        let app = items_app!(fake);

        let req = test::TestRequest::post()
            .uri(&format!("/api/lists/{}/items/289", list_id))
            .insert_header(("Authorization", bearer_for(owner)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 409);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MOVIE_ALREADY_IN_LIST");
        assert_eq!(movies_of(&fake, list_id), vec!["289"]);
    }

    #[actix_web::test]
    async fn stranger_cannot_add() {
        let fake = InMemoryMovieLists::default();
        let list_id = fake.seed(UserId::from(Uuid::new_v4()), "Noir", &[]);
        let app = items_app!(fake);

        let req = test::TestRequest::post()
            .uri(&format!("/api/lists/{}/items/289", list_id))
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 403);
        assert!(movies_of(&fake, list_id).is_empty());
    }

    #[actix_web::test]
    async fn remove_reports_missing_item_apart_from_missing_list() {
        let fake = InMemoryMovieLists::default();
        let owner = Uuid::new_v4();
        let list_id = fake.seed(UserId::from(owner), "Noir", &["289"]);
        let app = items_app!(fake);

        let remove = |uri: String| {
            test::TestRequest::delete()
                .uri(&uri)
                .insert_header(("Authorization", bearer_for(owner)))
                .to_request()
        };

        let resp = test::call_service(&app, remove(format!("/api/lists/{}/items/603", list_id))).await;
        assert_eq!(resp.status().as_u16(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ITEM_NOT_FOUND");

        let resp =
            test::call_service(&app, remove(format!("/api/lists/{}/items/289", Uuid::new_v4())))
                .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "LIST_NOT_FOUND");

        let resp = test::call_service(&app, remove(format!("/api/lists/{}/items/289", list_id))).await;
        assert_eq!(resp.status().as_u16(), 204);
        assert!(movies_of(&fake, list_id).is_empty());
    }

    #[actix_web::test]
    async fn stranger_cannot_remove() {
        let fake = InMemoryMovieLists::default();
        let list_id = fake.seed(UserId::from(Uuid::new_v4()), "Noir", &["289"]);
        let app = items_app!(fake);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/lists/{}/items/289", list_id))
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 403);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_LIST_OWNER");
        assert_eq!(movies_of(&fake, list_id), vec!["289"]);
    }
}
