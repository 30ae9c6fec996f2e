use api_server::{cors_layer, router, AppState};
use application::StatsApp;
use config::Config;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(
                    "api_server=debug,application=info,domain=info,tower_http=debug",
                )),
        )
        .init();

    info!("🚀 Starting torrent stats API server");

    // Load configuration from environment
    let config = Config::from_env()?;

    info!("💾 Using database: {}", config.database_path);
    info!("🧲 qBittorrent Web API: {}", config.qbittorrent_url);
    info!("🌐 API server will bind to: {}", config.api_address());

    let app = StatsApp::new(&config)?;
    let app = router(AppState::new(app), cors_layer(&config.cors_origin)?);

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API server listening at http://{}", bind_address);
    info!("📖 Routes:");
    info!("   GET  /                         - qBittorrent version");
    info!("   GET  /stats                    - Cached torrents with activity");
    info!("   POST /delete                   - Delete torrent (hash as body)");
    info!("   GET  /torrents                 - Table rows (?sort=&order=&days=)");
    info!("   GET  /torrents/:hash/activity  - Uploads per day (?days=)");
    info!("   GET  /disks                    - Disk usage");
    info!("   GET  /health                   - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
