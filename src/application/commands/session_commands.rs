// src/application/commands/session_commands.rs
//
// Demo sign-in: any name is accepted, nothing is verified.

use serde_json::json;

use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

pub fn login(state: &AppState, name: &str) -> Result<serde_json::Value, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    let user = json!({
        "name": name,
        "signedInAt": chrono::Utc::now().to_rfc3339(),
    });

    state
        .session
        .sign_in(user.clone())
        .map(|_| user)
        .to_error_response()
}

pub fn logout(state: &AppState) -> Result<(), String> {
    state.session.sign_out().to_error_response()
}

pub fn current_user(state: &AppState) -> Result<Option<serde_json::Value>, String> {
    Ok(state.session.current_user())
}
