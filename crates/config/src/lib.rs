use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Longest activity window the stats service accepts.
pub const MAX_ACTIVITY_WINDOW_DAYS: u32 = 365;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: String,
    pub api_host: String,
    pub api_port: u16,
    pub qbittorrent_url: String,
    pub cors_origin: String,
    pub disk_paths: Vec<PathBuf>,
    pub sample_interval_seconds: u64,
    pub activity_window_days: u32,
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from the environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let config = Config {
            database_path: text("DATABASE_PATH", "stats.db"),

            api_host: text("API_HOST", "127.0.0.1"),

            api_port: parse(&lookup, "API_PORT", 3001)?,

            qbittorrent_url: text("QBITTORRENT_URL", "http://localhost:8888"),

            cors_origin: text("CORS_ORIGIN", "http://localhost:3000"),

            disk_paths: lookup("DISK_PATHS")
                .map(|paths| {
                    paths
                        .split(',')
                        .map(str::trim)
                        .filter(|path| !path.is_empty())
                        .map(PathBuf::from)
                        .collect()
                })
                .unwrap_or_default(),

            sample_interval_seconds: positive(
                parse(&lookup, "SAMPLE_INTERVAL_SECONDS", 600)?,
                "SAMPLE_INTERVAL_SECONDS",
            )?,

            activity_window_days: window_days(parse(&lookup, "ACTIVITY_WINDOW_DAYS", 10)?)?,

            request_timeout_seconds: positive(
                parse(&lookup, "REQUEST_TIMEOUT_SECONDS", 10)?,
                "REQUEST_TIMEOUT_SECONDS",
            )?,
        };

        Ok(config)
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_secs(self.sample_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

fn positive<T>(value: T, name: &'static str) -> Result<T, ConfigError>
where
    T: Default + PartialEq + ToString,
{
    if value == T::default() {
        return Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

fn window_days(days: u32) -> Result<u32, ConfigError> {
    if !(1..=MAX_ACTIVITY_WINDOW_DAYS).contains(&days) {
        return Err(ConfigError::InvalidValue {
            name: "ACTIVITY_WINDOW_DAYS",
            value: days.to_string(),
            reason: format!("must be between 1 and {}", MAX_ACTIVITY_WINDOW_DAYS),
        });
    }
    Ok(days)
}
