use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use auth_api::handlers::{auth, health, profile};
use auth_api::state::AppState;
use auth_core::services::{AuthConfig, AuthService};
use auth_infrastructure::database::connection;
use auth_infrastructure::{PgAccountRepository, RedisSessionStore};
use auth_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    auth_shared::telemetry::init_telemetry();

    info!("Auth server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    let pool = connection::create_pool(&config.database.url, config.database.max_connections).await?;
    info!("Database connection established.");

    sqlx::migrate!("../../migrations").run(&pool).await?;

    // Connect to Redis (session registry + profile cache)
    let session_store = Arc::new(RedisSessionStore::new(&config.redis)?);
    info!("Redis connection pool ready.");

    let accounts = Arc::new(PgAccountRepository::new(
        pool,
        Duration::from_secs(config.database.op_timeout_secs),
    ));

    let auth_service = Arc::new(AuthService::new(
        accounts,
        session_store.clone(),
        session_store,
        AuthConfig {
            jwt_secret: config.jwt.secret.clone(),
            token_ttl_secs: config.jwt.access_token_expiry,
        },
    ));

    let state = AppState { auth: auth_service };

    // Build router
    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/me", get(profile::get_me).put(profile::update_me))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
