use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Generation failure: {0}")]
    Generation(String),

    #[error("Origin not allowed: {0}")]
    CorsRejection(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error envelope returned to the front-end: `{ error, details? }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            missing @ LlmError::MissingApiKey => AppError::Configuration(missing.to_string()),
            other => AppError::Generation(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected submission: {msg}");
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuração do servidor incompleta.".to_string(),
                    Some(msg),
                )
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Falha ao comunicar com a IA no servidor.".to_string(),
                    Some(msg),
                )
            }
            AppError::CorsRejection(origin) => {
                tracing::warn!("Blocked request from origin {origin}");
                (
                    StatusCode::FORBIDDEN,
                    "Origem não permitida pela política de CORS.".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor.".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
