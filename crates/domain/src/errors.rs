use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Torrent not found with hash: {0}")]
    TorrentNotFound(String),

    #[error("Upstream client error: {0}")]
    UpstreamError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Disk usage error: {0}")]
    DiskError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
