pub mod modules;
pub use modules::auth;
pub mod api;
pub mod health;
pub mod shared;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::user_profile::FetchUserProfileService;
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, refresh_token::RefreshTokenUseCase,
    register_user::RegisterUserUseCase,
};
use crate::modules::membership::adapter::outgoing::MembershipRepositoryPostgres;
use crate::modules::membership::application::domain::entities::MembershipKind;
use crate::modules::membership::application::membership_use_cases::MembershipUseCases;
use crate::modules::membership::application::service::MembershipService;
use crate::modules::movie_list::adapter::outgoing::{
    MovieListQueryPostgres, MovieListRepositoryPostgres,
};
use crate::modules::movie_list::application::movie_list_use_cases::MovieListUseCases;
use crate::modules::movie_list::application::service::{
    ListItemService, ListManagementService, ListReadService,
};
use crate::modules::profile::adapter::outgoing::ProfileQueryPostgres;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::ProfileService;
use crate::modules::review::adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres};
use crate::modules::review::application::review_use_cases::ReviewUseCases;
use crate::modules::review::application::service::{
    DeleteReviewService, GetReviewService, ListReviewsService, PatchReviewService,
    ReviewSummaryService, SubmitReviewService,
};
use crate::modules::social::adapter::outgoing::{FollowRepositoryPostgres, SocialQueryPostgres};
use crate::modules::social::application::service::{ConnectionsService, FollowService};
use crate::modules::social::application::social_use_cases::SocialUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub review: ReviewUseCases,
    pub favourites: MembershipUseCases,
    pub watchlist: MembershipUseCases,
    pub movie_list: MovieListUseCases,
    pub social: SocialUseCases,
    pub profile: ProfileUseCases,
    pub user_identity_resolver: UserIdentityResolver,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn membership_use_cases(kind: MembershipKind, repo: MembershipRepositoryPostgres) -> MembershipUseCases {
    let service = Arc::new(MembershipService::new(kind, repo));
    MembershipUseCases {
        add: service.clone(),
        exists: service.clone(),
        remove: service.clone(),
        list: service,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // .env.{RUST_ENV} first, then .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(env_or("DB_MAX_CONNECTIONS", 20))
        .min_connections(env_or("DB_MIN_CONNECTIONS", 2))
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if env_or("RUN_MIGRATIONS", false) {
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run migrations");
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_config = JwtConfig::from_env().expect("Invalid JWT configuration");
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service.clone());
    let password_hasher = Arc::new(Argon2Hasher::from_env());
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
            Arc::new(BasicPasswordPolicy),
            token_provider.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            user_repo,
            password_hasher,
            token_provider.clone(),
        )),
        fetch_profile: Arc::new(FetchUserProfileService::new(user_query.clone())),
        refresh: Arc::new(RefreshTokenUseCase::new(token_provider.clone())),
    };

    // Reviews
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let review_query = ReviewQueryPostgres::new(Arc::clone(&db_arc));
    let review = ReviewUseCases {
        submit: Arc::new(SubmitReviewService::new(review_repo.clone())),
        get: Arc::new(GetReviewService::new(review_query.clone())),
        patch: Arc::new(PatchReviewService::new(review_repo.clone())),
        delete: Arc::new(DeleteReviewService::new(review_repo)),
        list: Arc::new(ListReviewsService::new(review_query.clone())),
        summary: Arc::new(ReviewSummaryService::new(review_query)),
    };

    // Favourites / watchlist
    let membership_repo = MembershipRepositoryPostgres::new(Arc::clone(&db_arc));
    let favourites = membership_use_cases(MembershipKind::Favourite, membership_repo.clone());
    let watchlist = membership_use_cases(MembershipKind::Watchlist, membership_repo);

    // Lists
    let list_repo = MovieListRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_management = Arc::new(ListManagementService::new(list_repo.clone()));
    let list_items = Arc::new(ListItemService::new(list_repo));
    let list_reads = Arc::new(ListReadService::new(MovieListQueryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let movie_list = MovieListUseCases {
        create: list_management.clone(),
        get: list_reads.clone(),
        list_for_user: list_reads,
        rename: list_management.clone(),
        delete: list_management,
        add_item: list_items.clone(),
        remove_item: list_items,
    };

    // Social
    let follows = Arc::new(FollowService::new(FollowRepositoryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let connections = Arc::new(ConnectionsService::new(SocialQueryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let social = SocialUseCases {
        follow: follows.clone(),
        unfollow: follows,
        followers: connections.clone(),
        following: connections.clone(),
        friends: connections,
    };

    let profile = ProfileUseCases {
        get: Arc::new(ProfileService::new(ProfileQueryPostgres::new(Arc::clone(
            &db_arc,
        )))),
    };

    let state = AppState {
        auth,
        review,
        favourites,
        watchlist,
        movie_list,
        social,
        profile,
        user_identity_resolver: UserIdentityResolver::new(Arc::new(user_query)),
    };

    let openapi = ApiDoc::openapi();
    info!("Server running on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Literal segments (`mine`, `summary`, `exists`) are registered before the
/// `{id}` / `{movie_id}` routes sharing their prefix.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::membership::adapter::incoming::web::routes as membership_routes;
    use crate::modules::movie_list::adapter::incoming::web::routes as list_routes;
    use crate::modules::profile::adapter::incoming::web::routes as profile_routes;
    use crate::modules::review::adapter::incoming::web::routes as review_routes;
    use crate::modules::social::adapter::incoming::web::routes as social_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::fetch_me_handler);
    cfg.service(auth_routes::refresh_token_handler);
    // Reviews
    cfg.service(review_routes::list_reviews_handler);
    cfg.service(review_routes::submit_review_handler);
    cfg.service(review_routes::list_my_reviews_handler);
    cfg.service(review_routes::review_summary_handler);
    cfg.service(review_routes::get_review_handler);
    cfg.service(review_routes::patch_review_handler);
    cfg.service(review_routes::delete_review_handler);
    // Favourites
    cfg.service(membership_routes::add_favourite_handler);
    cfg.service(membership_routes::list_favourites_handler);
    cfg.service(membership_routes::favourite_exists_handler);
    cfg.service(membership_routes::remove_favourite_handler);
    // Watchlist
    cfg.service(membership_routes::add_watchlist_handler);
    cfg.service(membership_routes::list_watchlist_handler);
    cfg.service(membership_routes::watchlist_exists_handler);
    cfg.service(membership_routes::remove_watchlist_handler);
    // Lists
    cfg.service(list_routes::create_list_handler);
    cfg.service(list_routes::my_lists_handler);
    cfg.service(list_routes::get_list_handler);
    cfg.service(list_routes::rename_list_handler);
    cfg.service(list_routes::delete_list_handler);
    cfg.service(list_routes::add_list_item_handler);
    cfg.service(list_routes::add_list_item_by_path_handler);
    cfg.service(list_routes::remove_list_item_handler);
    // Social
    cfg.service(social_routes::follow_user_handler);
    cfg.service(social_routes::unfollow_user_handler);
    cfg.service(social_routes::followers_handler);
    cfg.service(social_routes::following_handler);
    cfg.service(social_routes::friends_handler);
    // Public profiles
    cfg.service(profile_routes::get_profile_handler);
    cfg.service(profile_routes::user_reviews_handler);
    cfg.service(profile_routes::user_lists_handler);
    cfg.service(profile_routes::user_favourites_handler);
    cfg.service(profile_routes::user_watchlist_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
