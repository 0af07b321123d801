use crate::account::inbound::state::AccountState;
use crate::account::outbound::provider::{HttpIdentityProvider, IdentityProvider};
use crate::account::outbound::store::{ProfileStore, RedisProfileStore};
use crate::account::usecase::profile::{ProfileSync, ProfileSyncService};
use crate::account::usecase::session::{SessionTracker, SessionUseCase};
use crate::app::config::Config;
use crate::app::middleware::request_response_logger;
use crate::app::router;
use crate::app::state::AppState;
use axum::middleware;
use bb8_redis::RedisConnectionManager;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    decompression::RequestDecompressionLayer,
    timeout::TimeoutLayer,
};

mod account;
mod app;

/// Initializes all dependencies and starts the web server.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Create a broadcast channel to signal shutdown to all application components.
    // Spawn a task to listen for shutdown signals (Ctrl+C and SIGTERM).
    let (shutdown_tx, _) = broadcast::channel(1);
    spawn_shutdown_listener(shutdown_tx.clone());

    // Initialize configuration and watcher.
    // The .watch() method enables automatic reloading when the config file changes.
    let config = Arc::new(
        Config::builder("config/config.yaml")
            .watch_interval(Duration::from_secs(5))
            .watch()
            .build()?,
    );

    // Initialize the Redis connection pool backing the profile document store.
    let rds_url = config.get::<String>("store.redis_url")?;
    let rds_manager = RedisConnectionManager::new(rds_url)?;
    let rds_pool = bb8::Pool::builder()
        .max_size(config.get::<u32>("store.pool_size")?)
        .build(rds_manager)
        .await?;

    // Initialize the identity provider client.
    let provider: Arc<dyn IdentityProvider> = Arc::new(HttpIdentityProvider::new(
        config.get("identity.base_url")?,
        config.get("identity.api_key")?,
    )?);

    // Initialize the profile store and the synchronization service above it.
    let collection = config.get::<String>("store.collection")?;
    let store: Arc<dyn ProfileStore> = Arc::new(RedisProfileStore::new(rds_pool, collection));
    let profiles: Arc<dyn ProfileSync> = Arc::new(ProfileSyncService::new(store));

    // Start the session tracker. It holds the provider subscription for the
    // lifetime of the process and is released again after the server exits.
    let tracker = SessionTracker::start(provider, profiles);
    let session: Arc<dyn SessionUseCase> = tracker.clone();

    let app_state = AppState {
        config: config.clone(),
        account: AccountState::new(session),
    };

    // Create the Router and Middlewares
    let timeout_secs = Duration::from_secs(config.get::<u64>("server.timeout_secs")?);
    let app = router::create_router_app(app_state).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_response_logger))
            .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any)) // Enables CORS for all origins
            .layer(RequestDecompressionLayer::new()) // Enables request compression
            .layer(CompressionLayer::new()) // Enables response compression
            .layer(TimeoutLayer::new(timeout_secs)), // Adds a request timeout
    );

    let server_address = config.get::<String>("server.address")?;
    let listener = tokio::net::TcpListener::bind(&server_address).await?;

    tracing::info!("🚀 listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_tx.subscribe().recv().await.ok();
            tracing::info!("🛑 Server is shutting down gracefully...");
        })
        .await?;

    // Release the identity subscription before the process exits.
    tracker.shutdown().await;

    Ok(())
}

/// Spawns a background task to listen for system shutdown signals.
fn spawn_shutdown_listener(shutdown_tx: broadcast::Sender<()>) {
    tokio::spawn(async move {
        let ctrl_c = async {
            signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => { tracing::info!("🔻 Received SIGINT (Ctrl+C)")},
            _ = terminate => { tracing::info!("🔻 Received SIGTERM")},
        }

        // Send the shutdown signal to all parts of the application.
        if shutdown_tx.send(()).is_err() {
            tracing::error!("Failed to send shutdown signal");
        }
    });
}
