use application::StatsApp;
use clap::Parser;
use config::Config;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Periodically samples qBittorrent and records upload activity into the stats cache.
#[derive(Parser, Debug)]
#[command(name = "qb-stats", version, about)]
struct Args {
    /// Run a single sampling pass and exit
    #[arg(long)]
    once: bool,

    /// Override DATABASE_PATH
    #[arg(long, value_name = "PATH")]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("qb_stats=info,application=info,domain=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(database) = args.database {
        config.database_path = database;
    }

    info!("🚀 Starting qBittorrent stats sampler");
    info!("🧲 qBittorrent Web API: {}", config.qbittorrent_url);

    let app = StatsApp::new(&config)?;

    if args.once {
        app.sample().await?;
        return Ok(());
    }

    info!(
        "⏱️  Sampling every {}s (Press Ctrl+C to stop)",
        config.sample_interval_seconds
    );

    sample_until(config.sample_interval(), || app.sample(), shutdown_signal()).await;

    info!("👋 Shutting down stats sampler");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Runs `sample` every `period` until `shutdown` resolves, including while a
/// pass is in flight. Failed passes are logged and the loop keeps going.
async fn sample_until<F, Fut, T, E>(period: Duration, mut sample: F, shutdown: impl Future<Output = ()>)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut interval = tokio::time::interval(period);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                tokio::select! {
                    result = sample() => {
                        if let Err(e) = result {
                            error!("❌ Sampling pass failed: {}", e);
                        }
                    }
                    _ = &mut shutdown => break,
                }
            }
            _ = &mut shutdown => break,
        }
    }
}
