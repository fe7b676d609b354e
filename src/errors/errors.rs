//! Application-wide error system
//!
//! Every failure in the security filter chain and the handlers is expressed as
//! an [`AppError`]. `thiserror` derives the `Error` impl and
//! `actix_web::ResponseError` turns each variant into the matching HTTP status.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(request: RegisterCustomerRequest) -> Result<Customer, AppError> {
//!     if repository.exists_by_email(&request.email).await? {
//!         return Err(AppError::ConflictError("Email already registered".to_string()));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::header;
use thiserror::Error;

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const BASIC_REALM: &str = "Basic realm=\"Realm\"";

/// Application-wide error type
///
/// Converted automatically into an HTTP response when returned from a handler
/// or raised by a security filter.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input validation failure (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Resource not found (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate data (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// Missing or invalid credentials (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Authenticated but not allowed (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// Missing or mismatching anti-forgery token (403 Forbidden)
    #[error("CSRF error: {0}")]
    CsrfError(String),

    /// Internal server error (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) | AppError::CsrfError(_) => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON error response.
    ///
    /// Authentication failures carry a Basic challenge so browsers and CLI
    /// clients know which scheme to retry with.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut builder = actix_web::HttpResponse::build(self.status_code());

        if matches!(self, AppError::AuthenticationError(_)) {
            builder.insert_header((header::WWW_AUTHENTICATE, BASIC_REALM));
        }

        builder.json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Convenience result alias
pub type AppResult<T> = Result<T, AppError>;

/// Converts foreign errors into [`AppError::InternalError`] with context
pub trait ErrorContext<T> {
    /// Wraps the error with a static context message.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
