// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Commands turn errors into JSON ErrorResponse strings
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod preferences_commands;
pub mod session_commands;

pub use catalog_commands::*;
pub use preferences_commands::*;
pub use session_commands::*;
