//! Authentication and token services
//!
//! # Security
//!
//! - bcrypt password hashing with an environment specific cost
//! - HMAC-SHA256 signed JWTs with issuer and expiry checks
//! - CSRF tokens kept in a JavaScript readable cookie and echoed in a header

pub mod csrf_token_repository;
pub mod password_encoder;
pub mod token_service;

pub use csrf_token_repository::{constant_time_eq, CookieCsrfTokenRepository};
pub use password_encoder::{BCryptPasswordEncoder, PasswordEncoder};
pub use token_service::TokenService;
