use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    MissingField(String),
    #[error("Card not found")]
    CardNotFound,
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Card store at {} is not valid JSON: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingField(_) => StatusCode::BAD_REQUEST,
            GatewayError::CardNotFound => StatusCode::NOT_FOUND,
            GatewayError::MalformedBody(_)
            | GatewayError::Io(_)
            | GatewayError::Serialization(_)
            | GatewayError::CorruptStore { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            GatewayError::CardNotFound => json!({ "status": "declined", "reason": self.to_string() }),
            GatewayError::MissingField(_) => json!({ "error": self.to_string() }),
            _ => {
                tracing::error!(error = %self, "request failed");
                json!({ "error": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GatewayError::MissingField("Card number missing".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GatewayError::CardNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            GatewayError::MalformedBody("eof".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::Io(std::io::Error::other("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_message_is_verbatim() {
        let err = GatewayError::MissingField("Missing card details".into());
        assert_eq!(err.to_string(), "Missing card details");
    }
}
