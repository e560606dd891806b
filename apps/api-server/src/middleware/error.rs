//! Error handling - maps application failures to the API's `{message}` /
//! `{message, errors}` response bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use mahogany_core::error::RepoError;
use mahogany_shared::{ErrorResponse, FieldError};
use std::fmt;

/// Application-level error type. Every handler failure funnels through here.
#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Validation {
        message: &'static str,
        errors: Vec<FieldError>,
    },
    Conflict(&'static str),
    Internal(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation { message, errors } => {
                write!(f, "{}: {} field(s) failed", message, errors.len())
            }
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg) => ErrorResponse::new(*msg),
            AppError::Validation { message, errors } => {
                ErrorResponse::new(*message).with_errors(errors.clone())
            }
            AppError::Conflict(msg) => ErrorResponse::new(*msg),
            AppError::Internal(msg) => ErrorResponse::new(*msg),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Catch-all mapping for a route. The ports are written against a fallible
/// backend; anything they surface is unexpected, so the detail is logged and
/// the caller sees only the route's public message.
pub fn internal(message: &'static str) -> impl Fn(RepoError) -> AppError {
    move |err| {
        tracing::error!(error = %err, "repository failure");
        AppError::Internal(message)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
