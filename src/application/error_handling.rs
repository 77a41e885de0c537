// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Referenced entry does not exist (404)
    NotFound,

    /// Missing required field (400)
    Validation,

    /// Storage database error (500)
    Database,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(id) => Self::not_found(&format!("Catalog entry '{}'", id)),

            AppError::Domain(DomainError::Validation(message)) => Self::validation(message),

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::internal(ErrorType::Database, "Storage operation failed")
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::internal(ErrorType::Database, "Storage connection failed")
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::internal(ErrorType::Internal, "Data serialization failed")
            }

            AppError::PersistenceDecode { key, source } => {
                log::error!("Undecodable value under {}: {}", key, source);
                Self::internal(ErrorType::Internal, "Stored data is unreadable")
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    fn internal(error_type: ErrorType, message: &str) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details: Some("Check logs for details".to_string()),
        }
    }

    /// JSON form handed back to the UI
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound("g9".to_string()));
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Catalog entry 'g9' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::Validation(
            "title is required".to_string(),
        )));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "title is required");
    }

    #[test]
    fn test_error_categories() {
        let names: Vec<String> = [
            ErrorType::NotFound,
            ErrorType::Validation,
            ErrorType::Database,
            ErrorType::FileSystem,
            ErrorType::Internal,
        ]
        .iter()
        .map(|t| serde_json::to_string(t).unwrap())
        .collect();

        assert_eq!(
            names,
            vec![
                "\"not_found\"",
                "\"validation\"",
                "\"database\"",
                "\"file_system\"",
                "\"internal\"",
            ]
        );
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Catalog entry 'g9'");
        let json = error.to_json();
        assert!(json.contains("not_found"));
        assert!(json.contains("Catalog entry 'g9' not found"));
    }

    #[test]
    fn test_result_conversion() {
        let result: Result<(), AppError> = Err(AppError::NotFound("g9".to_string()));
        let err = result.to_error_response().unwrap_err();
        let parsed: ErrorResponse = serde_json::from_str(&err).unwrap();
        assert_eq!(parsed.error_type, ErrorType::NotFound);
        assert!(!parsed.success);
    }
}
