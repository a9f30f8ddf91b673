use questsearch::{
    api::{build_router, AppState},
    catalog::CatalogService,
    config::Config,
    search::SearchService,
    state::create_store,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (tracing needs it, so it comes first)
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        default_config()
    });

    init_tracing(&config);

    tracing::info!("Starting QuestSearch v{}", env!("CARGO_PKG_VERSION"));

    // Initialize storage backend
    tracing::info!("Storage backend: {:?}", config.state.backend);
    let store = create_store(&config.state)?;

    // Wire the services around the shared store handle
    let catalog = Arc::new(CatalogService::new(store.clone()));
    let search = Arc::new(SearchService::new(store.clone()));
    let app_state = AppState::new(catalog, search);

    let app = build_router(app_state);

    // Start HTTP server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP API server listening on http://{}", addr);
    tracing::info!("   Health check: http://{}/health", addr);
    tracing::info!("   Search: http://{}/search?q=<text>", addr);

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    store.flush().await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "questsearch={},tower_http=info",
            config.observability.log_level
        )
        .into()
    });

    if config.observability.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn default_config() -> Config {
    use questsearch::config::*;

    Config {
        server: ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        },
        state: StateConfig {
            backend: StateBackend::Sled,
            path: Some("./data/catalog".into()),
        },
        observability: ObservabilityConfig {
            log_level: "info".to_string(),
            json_logs: false,
        },
    }
}
