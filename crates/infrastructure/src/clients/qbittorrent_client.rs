use async_trait::async_trait;
use domain::{DomainError, TorrentClient, TorrentSnapshot};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Fields of `/api/v2/torrents/info` entries the cache keeps. The rest is ignored.
#[derive(Debug, Deserialize)]
struct TorrentInfo {
    hash: String,
    name: String,
    size: i64,
    added_on: i64,
    last_activity: i64,
    uploaded: i64,
    time_active: i64,
}

impl From<TorrentInfo> for TorrentSnapshot {
    fn from(info: TorrentInfo) -> Self {
        TorrentSnapshot {
            hash: info.hash,
            name: info.name,
            size: info.size,
            added_on: info.added_on,
            last_activity: info.last_activity,
            uploaded: info.uploaded,
            time_active: info.time_active,
        }
    }
}

/// qBittorrent Web API v2 client.
pub struct QbittorrentClient {
    http: Client,
    base_url: String,
}

impl QbittorrentClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::UpstreamError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v2/{}", self.base_url, path)
    }

    async fn check(response: Response, path: &str) -> Result<Response, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::UpstreamError(format!(
                "{} returned {}: {}",
                path,
                status,
                body.trim()
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl TorrentClient for QbittorrentClient {
    async fn list_torrents(&self) -> Result<Vec<TorrentSnapshot>, DomainError> {
        let path = "torrents/info";
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| DomainError::UpstreamError(e.to_string()))?;

        let torrents: Vec<TorrentInfo> = Self::check(response, path)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::ParseError(format!("Invalid torrent list: {}", e)))?;

        debug!("qBittorrent reported {} torrents", torrents.len());
        Ok(torrents.into_iter().map(Into::into).collect())
    }

    async fn delete_torrent(&self, hash: &str, delete_files: bool) -> Result<(), DomainError> {
        let path = "torrents/delete";
        let delete_files = if delete_files { "true" } else { "false" };
        let response = self
            .http
            .post(self.endpoint(path))
            .form(&[("hashes", hash), ("deleteFiles", delete_files)])
            .send()
            .await
            .map_err(|e| DomainError::UpstreamError(e.to_string()))?;

        Self::check(response, path).await?;
        Ok(())
    }

    async fn version(&self) -> Result<String, DomainError> {
        let path = "app/version";
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| DomainError::UpstreamError(e.to_string()))?;

        Self::check(response, path)
            .await?
            .text()
            .await
            .map_err(|e| DomainError::UpstreamError(e.to_string()))
    }
}
