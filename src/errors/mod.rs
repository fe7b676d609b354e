//! Application-wide error type and its HTTP mapping.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
