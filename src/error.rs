use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
    #[error("unexpected document shape: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to fetch seed data: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("query parameter {name} must be an integer, got {value:?}")]
    NotAnInteger { name: &'static str, value: String },
}

/// The only failure the HTTP surface reports. Always rendered as a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}: {error}")]
    OperationFailed { message: String, error: String },
}

impl AppError {
    pub fn operation_failed(message: &str, error: impl std::fmt::Display) -> Self {
        AppError::OperationFailed {
            message: message.to_string(),
            error: error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Failed response: {}", self);

        let AppError::OperationFailed { message, error } = self;
        let body = Json(json!({
            "message": message,
            "error": error,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
