use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use domain::{DiskUsage, SortField, SortOrder, TorrentActivity, TorrentStats, TorrentSummary};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct TableQuery {
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub days: Option<u32>,
}

/// Version string of the torrent client, as a liveness probe for the proxy path.
pub async fn client_version(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.app.stats_service.client_version().await?)
}

pub async fn list_stats(State(state): State<AppState>) -> Result<Json<Vec<TorrentStats>>, ApiError> {
    Ok(Json(state.app.stats_service.list_stats().await?))
}

/// Body is the raw torrent hash.
pub async fn delete_torrent(
    State(state): State<AppState>,
    hash: String,
) -> Result<StatusCode, ApiError> {
    let report = state.app.stats_service.delete_torrent(&hash).await?;
    info!(
        "🗑️  Removed {} ({} activity rows)",
        report.hash, report.samples_removed
    );
    Ok(StatusCode::OK)
}

pub async fn list_torrents(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Result<Json<Vec<TorrentSummary>>, ApiError> {
    let days = query.days.unwrap_or(state.app.activity_window_days);
    let rows = state
        .app
        .stats_service
        .summaries(
            days,
            query.sort.unwrap_or_default(),
            query.order.unwrap_or_default(),
            &Local::now(),
        )
        .await?;
    Ok(Json(rows))
}

pub async fn torrent_activity(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<TorrentActivity>, ApiError> {
    let days = query.days.unwrap_or(state.app.activity_window_days);
    let activity = state
        .app
        .stats_service
        .activity_by_day(&hash, days, &Local::now())
        .await?;
    Ok(Json(activity))
}

pub async fn disk_usage(State(state): State<AppState>) -> Result<Json<Vec<DiskUsage>>, ApiError> {
    Ok(Json(state.app.disk_service.usage().await?))
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
