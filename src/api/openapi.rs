use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::routes::{
    AccountDto, AuthSessionDto, LoginRequestDto, RefreshTokenRequestDto, RefreshTokenResponseDto,
    RegisterUserRequestDto,
};
use crate::modules::membership::adapter::incoming::web::routes::{
    AddMembershipRequestDto, MembershipCreatedDto, MembershipEntryDto, MembershipExistsDto,
};
use crate::modules::movie_list::adapter::incoming::web::routes::{
    AddListItemRequestDto, ListNameRequestDto, MovieListDto, MovieListItemDto,
};
use crate::modules::profile::adapter::incoming::web::routes::{ProfileCountsDto, PublicProfileDto};
use crate::modules::review::adapter::incoming::web::routes::{
    PatchReviewRequestDto, ReviewDto, ReviewPageDto, ReviewSummaryDto, ReviewViewDto,
    SubmitReviewRequestDto,
};
use crate::modules::social::adapter::incoming::web::routes::{
    FollowCreatedDto, FollowRequestDto, FollowViewDto, PublicUserDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FilmNerd API",
        version = "1.0.0",
        description = "Reviews, favourites, watchlists, movie lists and follows for movie fans",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_me_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,

        // Reviews
        crate::modules::review::adapter::incoming::web::routes::list_reviews_handler,
        crate::modules::review::adapter::incoming::web::routes::submit_review_handler,
        crate::modules::review::adapter::incoming::web::routes::list_my_reviews_handler,
        crate::modules::review::adapter::incoming::web::routes::review_summary_handler,
        crate::modules::review::adapter::incoming::web::routes::get_review_handler,
        crate::modules::review::adapter::incoming::web::routes::patch_review_handler,
        crate::modules::review::adapter::incoming::web::routes::delete_review_handler,

        // Favourites and watchlist
        crate::modules::membership::adapter::incoming::web::routes::add_favourite_handler,
        crate::modules::membership::adapter::incoming::web::routes::list_favourites_handler,
        crate::modules::membership::adapter::incoming::web::routes::favourite_exists_handler,
        crate::modules::membership::adapter::incoming::web::routes::remove_favourite_handler,
        crate::modules::membership::adapter::incoming::web::routes::add_watchlist_handler,
        crate::modules::membership::adapter::incoming::web::routes::list_watchlist_handler,
        crate::modules::membership::adapter::incoming::web::routes::watchlist_exists_handler,
        crate::modules::membership::adapter::incoming::web::routes::remove_watchlist_handler,

        // Lists
        crate::modules::movie_list::adapter::incoming::web::routes::create_list_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::my_lists_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::get_list_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::rename_list_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::delete_list_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::add_list_item_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::add_list_item_by_path_handler,
        crate::modules::movie_list::adapter::incoming::web::routes::remove_list_item_handler,

        // Social
        crate::modules::social::adapter::incoming::web::routes::follow_user_handler,
        crate::modules::social::adapter::incoming::web::routes::unfollow_user_handler,
        crate::modules::social::adapter::incoming::web::routes::followers_handler,
        crate::modules::social::adapter::incoming::web::routes::following_handler,
        crate::modules::social::adapter::incoming::web::routes::friends_handler,

        // Public profiles
        crate::modules::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::user_reviews_handler,
        crate::modules::profile::adapter::incoming::web::routes::user_lists_handler,
        crate::modules::profile::adapter::incoming::web::routes::user_favourites_handler,
        crate::modules::profile::adapter::incoming::web::routes::user_watchlist_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequestDto,
            LoginRequestDto,
            AuthSessionDto,
            AccountDto,
            RefreshTokenRequestDto,
            RefreshTokenResponseDto,

            SubmitReviewRequestDto,
            PatchReviewRequestDto,
            ReviewDto,
            ReviewViewDto,
            ReviewPageDto,
            ReviewSummaryDto,

            AddMembershipRequestDto,
            MembershipEntryDto,
            MembershipCreatedDto,
            MembershipExistsDto,

            ListNameRequestDto,
            AddListItemRequestDto,
            MovieListDto,
            MovieListItemDto,

            FollowRequestDto,
            FollowCreatedDto,
            FollowViewDto,
            PublicUserDto,

            PublicProfileDto,
            ProfileCountsDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and tokens"),
        (name = "reviews", description = "Movie reviews and rating summaries"),
        (name = "favourites", description = "Favourite movies of the caller"),
        (name = "watchlist", description = "Movies the caller wants to watch"),
        (name = "lists", description = "Named movie lists"),
        (name = "social", description = "Follow graph"),
        (name = "users", description = "Public profiles"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
