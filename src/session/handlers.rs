use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::types::{EmailRequest, EmailResponse};
use crate::shared::{AppError, AppState};

/// GET /email
#[instrument(name = "get_email", skip(state))]
pub async fn get_email(State(state): State<AppState>) -> Result<Json<EmailResponse>, AppError> {
    let email = state.session_service.email().await?;
    Ok(Json(EmailResponse { email }))
}

/// PUT /email
///
/// Stores the email that games are saved under
#[instrument(name = "set_email", skip(state, request))]
pub async fn set_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailResponse>, AppError> {
    let email = state.session_service.set_email(&request.email).await?;
    info!("Email updated");
    Ok(Json(EmailResponse { email: Some(email) }))
}
