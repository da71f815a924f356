pub mod modules;
pub use modules::auth;
pub use modules::post;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::session_store_redis::RedisSessionStore;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::session_store::SessionStore;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::post::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::post::application::use_cases::{
    create_post::{CreatePostUseCase, ICreatePostUseCase},
    delete_post::{DeletePostUseCase, IDeletePostUseCase},
    get_feed::{GetFeedUseCase, IGetFeedUseCase},
    get_own_posts::{GetOwnPostsUseCase, IGetOwnPostsUseCase},
    update_post::{IUpdatePostUseCase, UpdatePostUseCase},
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub get_feed_use_case: Arc<dyn IGetFeedUseCase + Send + Sync>,
    pub get_own_posts_use_case: Arc<dyn IGetOwnPostsUseCase + Send + Sync>,
    pub create_post_use_case: Arc<dyn ICreatePostUseCase + Send + Sync>,
    pub update_post_use_case: Arc<dyn IUpdatePostUseCase + Send + Sync>,
    pub delete_post_use_case: Arc<dyn IDeletePostUseCase + Send + Sync>,
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

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let session_ttl_secs: u64 = env::var("SESSION_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(86_400);

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run database migrations");

    let db_arc = Arc::new(conn);

    // Redis connection (session store)
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));

    let argon2_password_hasher = if std::env::var("RUST_ENV").as_deref() == Ok("production") {
        Argon2Hasher::from_env()
    } else {
        Argon2Hasher::new()
    };
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(argon2_password_hasher);

    let session_store: Arc<dyn SessionStore> =
        Arc::new(RedisSessionStore::new(Arc::clone(&redis_arc)));

    // Auth use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        Arc::clone(&password_hasher),
        Arc::clone(&session_store),
        session_ttl_secs,
    );
    let logout_use_case = LogoutUseCase::new(Arc::clone(&session_store));

    // Post use cases
    let get_feed_use_case = GetFeedUseCase::new(post_query.clone());
    let get_own_posts_use_case = GetOwnPostsUseCase::new(post_query);
    let create_post_use_case = CreatePostUseCase::new(post_repo.clone());
    let update_post_use_case = UpdatePostUseCase::new(post_repo.clone());
    let delete_post_use_case = DeletePostUseCase::new(post_repo);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_use_case: Arc::new(logout_use_case),
        get_feed_use_case: Arc::new(get_feed_use_case),
        get_own_posts_use_case: Arc::new(get_own_posts_use_case),
        create_post_use_case: Arc::new(create_post_use_case),
        update_post_use_case: Arc::new(update_post_use_case),
        delete_post_use_case: Arc::new(delete_post_use_case),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_store)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::get_feed_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_dashboard_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::edit_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
