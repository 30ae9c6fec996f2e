use config::Config;
use domain::*;
use infrastructure::*;
use std::sync::Arc;
use tracing::info;

/// Stats application - wires the cache, the torrent client and the services
pub struct StatsApp {
    pub stats_service: StatsService,
    pub sampler_service: SamplerService,
    pub disk_service: DiskService,
    pub activity_window_days: u32,
}

impl StatsApp {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::new(&config.database_path)?;
        let pool = database.get_pool().clone();
        info!("💾 Opened stats cache at {}", config.database_path);

        // Create repository and client implementations
        let torrent_repository: Arc<dyn TorrentRepository> =
            Arc::new(SqliteTorrentRepository::new(pool.clone()));
        let activity_repository: Arc<dyn ActivityRepository> =
            Arc::new(SqliteActivityRepository::new(pool));
        let client: Arc<dyn TorrentClient> = Arc::new(QbittorrentClient::new(
            &config.qbittorrent_url,
            config.request_timeout(),
        )?);
        let disk_probe: Arc<dyn DiskProbe> = Arc::new(StatvfsDiskProbe::new());

        Ok(Self::from_parts(
            client,
            torrent_repository,
            activity_repository,
            disk_probe,
            config,
        ))
    }

    /// Builds the application around already constructed adapters.
    pub fn from_parts(
        client: Arc<dyn TorrentClient>,
        torrent_repository: Arc<dyn TorrentRepository>,
        activity_repository: Arc<dyn ActivityRepository>,
        disk_probe: Arc<dyn DiskProbe>,
        config: &Config,
    ) -> Self {
        // Domain services
        let stats_service = StatsService::new(
            client.clone(),
            torrent_repository.clone(),
            activity_repository.clone(),
        );

        let sampler_service = SamplerService::new(client, torrent_repository, activity_repository);

        let disk_service = DiskService::new(disk_probe, config.disk_paths.clone());

        Self {
            stats_service,
            sampler_service,
            disk_service,
            activity_window_days: config.activity_window_days,
        }
    }

    /// One sampling pass, logged the way the daemon reports it
    pub async fn sample(&self) -> Result<SampleReport, DomainError> {
        let report = self.sampler_service.sample_once().await?;
        info!(
            "📊 Sampling pass: {} new, {} with new activity, {} unchanged",
            report.discovered, report.sampled, report.unchanged
        );
        Ok(report)
    }
}
