use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unobuddy::{
    cloud::{CloudGameStore, GameStore, InMemoryGameStore},
    router,
    stats::SystemClock,
    AppConfig, AppState, FileCache, InMemoryGameResultRepository, PlayService, SessionService,
    StatsService,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unobuddy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting UNO Buddy");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn GameStore> = match &config.cloud.url {
        Some(url) => match CloudGameStore::new(url, &config.cloud.table_name, config.cloud.timeout_secs)
        {
            Ok(store) => {
                info!(%url, table = %config.cloud.table_name, "Using cloud game storage");
                Arc::new(store)
            }
            Err(err) => {
                error!(?err, "Failed to build cloud client");
                std::process::exit(1);
            }
        },
        None => {
            warn!("No cloud URL configured, games are kept in memory only");
            Arc::new(InMemoryGameStore::new())
        }
    };

    let clock = Arc::new(SystemClock);
    let stats_service = StatsService::builder(Arc::new(InMemoryGameResultRepository::new()))
        .with_store(store)
        .with_clock(clock.clone())
        .with_app_name(config.app_name.clone())
        .build();
    let session_service = SessionService::new(Arc::new(FileCache::new(&config.cache_path)));

    if let Some(email) = session_service.email_or_none().await {
        match stats_service.sync_from_cloud(&email).await {
            Ok(outcome) => info!(added = outcome.added, "Loaded saved games for cached email"),
            Err(err) => warn!(?err, "Initial sync failed"),
        }
    }

    let app_state = AppState::new(
        Arc::new(stats_service),
        Arc::new(PlayService::new(clock)),
        Arc::new(session_service),
    );

    let app = router(app_state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(?err, addr = %config.bind_addr, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!(addr = %config.bind_addr, "Server running");

    if let Err(err) = axum::serve(listener, app).await {
        error!(?err, "Server error");
    }
}
