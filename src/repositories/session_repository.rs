// src/repositories/session_repository.rs
//
// The signed-in user record belongs to the login screen; it is stored and
// returned as an opaque JSON value.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::infrastructure::Storage;

/// Storage key holding the signed-in user record
pub const USER_KEY: &str = "gamehub.user";

pub trait SessionRepository: Send + Sync {
    fn load_user(&self) -> AppResult<Option<serde_json::Value>>;
    fn save_user(&self, user: &serde_json::Value) -> AppResult<()>;
    fn clear_user(&self) -> AppResult<()>;
}

pub struct StorageSessionRepository {
    storage: Arc<dyn Storage>,
}

impl StorageSessionRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl SessionRepository for StorageSessionRepository {
    fn load_user(&self) -> AppResult<Option<serde_json::Value>> {
        let Some(bytes) = self.storage.read(USER_KEY)? else {
            return Ok(None);
        };

        let user = serde_json::from_slice(&bytes).map_err(|source| {
            AppError::PersistenceDecode {
                key: USER_KEY.to_string(),
                source,
            }
        })?;

        Ok(Some(user))
    }

    fn save_user(&self, user: &serde_json::Value) -> AppResult<()> {
        let bytes = serde_json::to_vec(user)?;
        self.storage.write(USER_KEY, &bytes)
    }

    fn clear_user(&self) -> AppResult<()> {
        self.storage.remove(USER_KEY)
    }
}
