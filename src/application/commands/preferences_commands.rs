// src/application/commands/preferences_commands.rs

use crate::application::dto::ThemeDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::Theme;

pub fn get_theme(state: &AppState) -> Result<ThemeDto, String> {
    Ok(state.preferences.current_theme().into())
}

pub fn set_theme(state: &AppState, theme: &str) -> Result<ThemeDto, String> {
    let theme: Theme = theme.parse()?;

    state
        .preferences
        .set_theme(theme)
        .map(ThemeDto::from)
        .to_error_response()
}

pub fn toggle_theme(state: &AppState) -> Result<ThemeDto, String> {
    state
        .preferences
        .toggle_theme()
        .map(ThemeDto::from)
        .to_error_response()
}
