// src/services/preferences_service.rs

use std::sync::Arc;

use crate::domain::Theme;
use crate::error::AppResult;
use crate::events::{EventBus, ThemeChanged};
use crate::repositories::PreferencesRepository;

pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
    event_bus: Arc<EventBus>,
}

impl PreferencesService {
    pub fn new(repo: Arc<dyn PreferencesRepository>, event_bus: Arc<EventBus>) -> Self {
        Self { repo, event_bus }
    }

    /// Persisted theme, or the default when none is stored or it is unreadable
    pub fn current_theme(&self) -> Theme {
        match self.repo.load_theme() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                log::warn!("Stored theme unusable, using default: {}", e);
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> AppResult<Theme> {
        self.repo.save_theme(theme)?;

        log::info!("Theme set to {}", theme);
        self.event_bus.emit(ThemeChanged::new(theme.to_string()));

        Ok(theme)
    }

    pub fn toggle_theme(&self) -> AppResult<Theme> {
        self.set_theme(self.current_theme().toggled())
    }
}
