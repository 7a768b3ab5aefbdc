use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// User-facing messages shared by the handlers.
pub mod msg {
    pub const NO_ORGANISATIONS: &str = "No organisations found in the database.";
    pub const ORGANISATION_NOT_FOUND: &str = "Organisation not found";
    pub const ORGANISATION_DELETED: &str = "Organisation deleted successfully";

    pub const NO_EMPLOYEES: &str = "No employees found in the database.";
    pub const NO_EMPLOYEES_FOR_ORG: &str = "No employees found for the given organization code.";
    pub const EMPLOYEE_ID_NOT_FOUND: &str = "No employee found with the given ID.";
    pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
    pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully";
    pub const FNAME_PARAM_REQUIRED: &str = "Please provide a 'fname' query parameter.";

    pub const NO_USERS: &str = "No users found in the database.";
    pub const USER_NOT_FOUND: &str = "This User is not present";
    pub const USER_ADDED: &str = "User added successfully";
    pub const USER_UPDATED: &str = "User updated successfully";
    pub const USER_DELETED: &str = "User deleted successfully";

    pub const INTEGRITY: &str = "Integrity error occurred. Please check your data.";
    pub const UNEXPECTED: &str = "An unexpected error occurred.";
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("The field '{0}' is required and cannot be empty.")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// A unique or primary-key constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// A foreign-key or NOT NULL constraint rejected the write.
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string(), None),
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone(), None),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone(), None),
            AppError::Conflict(m) => {
                tracing::warn!("Conflict: {}", m);
                (StatusCode::BAD_REQUEST, m.clone(), None)
            }
            AppError::Integrity(detail) => {
                tracing::error!("IntegrityError: {}", detail);
                (StatusCode::BAD_REQUEST, msg::INTEGRITY.to_string(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Unexpected error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg::UNEXPECTED.to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg::UNEXPECTED.to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Unexpected error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg::UNEXPECTED.to_string(),
                    Some(detail.clone()),
                )
            }
        };

        (status, Json(ErrorResponse { message, details })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Turns a missing row into `AppError::NotFound` with the given message.
pub trait OptionExt<T> {
    fn or_not_found(self, message: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, message: &str) -> Result<T> {
        self.ok_or_else(|| AppError::NotFound(message.to_string()))
    }
}
