// src/services/session_service.rs
//
// Keeps the signed-in user record for the login screen. The record's shape is
// the login screen's business; this service only stores and returns it.

use std::sync::Arc;

use crate::error::AppResult;
use crate::repositories::SessionRepository;

pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// Signed-in user, if any. An unreadable record counts as signed out.
    pub fn current_user(&self) -> Option<serde_json::Value> {
        match self.repo.load_user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Stored user record unusable, treating as signed out: {}", e);
                None
            }
        }
    }

    pub fn sign_in(&self, user: serde_json::Value) -> AppResult<()> {
        self.repo.save_user(&user)?;
        log::info!("User signed in");
        Ok(())
    }

    pub fn sign_out(&self) -> AppResult<()> {
        self.repo.clear_user()?;
        log::info!("User signed out");
        Ok(())
    }
}
