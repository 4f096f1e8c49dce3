use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::game::{GameError, PlayService};
use crate::session::{CacheError, SessionService};
use crate::setup::RosterError;
use crate::stats::{StatsError, StatsService};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<StatsService>,
    pub play_service: Arc<PlayService>,
    pub session_service: Arc<SessionService>,
}

impl AppState {
    pub fn new(
        stats_service: Arc<StatsService>,
        play_service: Arc<PlayService>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            stats_service,
            play_service,
            session_service,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    #[error("Local cache error: {0}")]
    Cache(#[from] CacheError),
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Stats(StatsError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Stats(err) => {
                error!(?err, "Stats failure");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Cache(err) => {
                error!(?err, "Local cache failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Local cache error: {}", err),
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
