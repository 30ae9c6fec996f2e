//! REST API over the torrent stats cache.
//!
//! | Route | |
//! |---|---|
//! | `GET /` | Torrent client version |
//! | `GET /stats` | Cached torrents with their activity samples |
//! | `POST /delete` | Delete the torrent whose hash is the request body |
//! | `GET /torrents` | Table rows, `?sort=&order=&days=` |
//! | `GET /torrents/:hash/activity` | Per-day uploads, `?days=` |
//! | `GET /disks` | Usage of the configured disks |
//! | `GET /health` | Health check |

use anyhow::Context;
use application::StatsApp;
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
        HeaderName, HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<StatsApp>,
}

impl AppState {
    pub fn new(app: StatsApp) -> Self {
        Self { app: Arc::new(app) }
    }
}

/// CORS policy for the dashboard frontend; `*` allows any origin.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    if origin.trim() == "*" {
        return Ok(CorsLayer::permissive());
    }

    let origin = HeaderValue::from_str(origin.trim())
        .with_context(|| format!("Invalid CORS origin: {}", origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
        ]))
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(routes::client_version))
        .route("/stats", get(routes::list_stats))
        .route("/delete", post(routes::delete_torrent))
        .route("/torrents", get(routes::list_torrents))
        .route("/torrents/:hash/activity", get(routes::torrent_activity))
        .route("/disks", get(routes::disk_usage))
        .route("/health", get(routes::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
