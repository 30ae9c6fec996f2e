use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::TorrentNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
            DomainError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            DomainError::RepositoryError(_)
            | DomainError::DiskError(_)
            | DomainError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let cases = [
            (DomainError::TorrentNotFound("abc".into()), StatusCode::NOT_FOUND),
            (DomainError::ValidationError("days".into()), StatusCode::BAD_REQUEST),
            (DomainError::UpstreamError("refused".into()), StatusCode::BAD_GATEWAY),
            (DomainError::RepositoryError("locked".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::DiskError("/mnt".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::ParseError("json".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn body_is_the_error_message() {
        let error = ApiError::from(DomainError::TorrentNotFound("abc".into()));
        assert_eq!(error.to_string(), "Torrent not found with hash: abc");
    }
}
