// src/repositories/preferences_repository.rs

use std::sync::Arc;

use crate::domain::Theme;
use crate::error::{AppError, AppResult};
use crate::infrastructure::Storage;

/// Storage key holding the display theme
pub const THEME_KEY: &str = "gamehub.theme";

pub trait PreferencesRepository: Send + Sync {
    fn load_theme(&self) -> AppResult<Option<Theme>>;
    fn save_theme(&self, theme: Theme) -> AppResult<()>;
}

pub struct StoragePreferencesRepository {
    storage: Arc<dyn Storage>,
}

impl StoragePreferencesRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl PreferencesRepository for StoragePreferencesRepository {
    fn load_theme(&self) -> AppResult<Option<Theme>> {
        let Some(bytes) = self.storage.read(THEME_KEY)? else {
            return Ok(None);
        };

        let theme = serde_json::from_slice(&bytes).map_err(|source| {
            AppError::PersistenceDecode {
                key: THEME_KEY.to_string(),
                source,
            }
        })?;

        Ok(Some(theme))
    }

    fn save_theme(&self, theme: Theme) -> AppResult<()> {
        let bytes = serde_json::to_vec(&theme)?;
        self.storage.write(THEME_KEY, &bytes)
    }
}
