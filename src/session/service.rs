use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::cache::LocalCache;
use crate::shared::AppError;

/// Key the user's email is stored under in the local cache
pub const EMAIL_KEY: &str = "email";

/// Remembers which email the user last played under
pub struct SessionService {
    cache: Arc<dyn LocalCache>,
}

impl SessionService {
    pub fn new(cache: Arc<dyn LocalCache>) -> Self {
        Self { cache }
    }

    pub async fn email(&self) -> Result<Option<String>, AppError> {
        let email = self.cache.get(EMAIL_KEY).await?;
        Ok(email.filter(|e| !e.trim().is_empty()))
    }

    /// Like [`SessionService::email`] but a broken cache only produces a warning
    pub async fn email_or_none(&self) -> Option<String> {
        match self.email().await {
            Ok(email) => email,
            Err(err) => {
                warn!(?err, "Failed to read email from local cache");
                None
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn set_email(&self, email: &str) -> Result<String, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email cannot be empty".to_string()));
        }

        self.cache.set(EMAIL_KEY, email).await?;
        info!("Email stored in local cache");
        Ok(email.to_string())
    }
}
