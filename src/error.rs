use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::services::storage::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    MissingParameter(&'static str),
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn persistence(message: &'static str, source: impl Into<StoreError>) -> Self {
        AppError::Persistence {
            message,
            source: source.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Persistence { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingParameter(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Database(_)
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::MissingParameter(msg) => (*msg).to_string(),
            AppError::Persistence { message, .. } => (*message).to_string(),
            AppError::Config(_) | AppError::Io(_) | AppError::Database(_) | AppError::Other(_) => {
                "internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Persistence { source, .. } = &self {
            warn!("store operation failed: {source}");
        }

        let status = self.status_code();
        let body = Json(json!({ "message": self.public_message() }));

        (status, body).into_response()
    }
}
