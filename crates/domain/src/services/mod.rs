pub mod activity_aggregator;
pub mod disk_service;
pub mod sampler_service;
pub mod stats_service;
pub mod torrent_table;

pub use activity_aggregator::{aggregate, MAX_WINDOW_DAYS};
pub use disk_service::DiskService;
pub use sampler_service::{SampleReport, SamplerService};
pub use stats_service::{DeleteReport, StatsService};
pub use torrent_table::{sort_summaries, summarize};
