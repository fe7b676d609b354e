//! # Configuration Module
//!
//! Environment driven settings plus the declarative security configuration.
//!
//! ## Modules
//!
//! - [`data_config`] - environment, server, password hashing, rate limiting
//! - [`auth_config`] - JWT, CSRF token repository and CORS settings
//! - [`security_config`] - route access rules, CORS middleware and the
//!   ordered security filter chain
//!
//! ## Environment variables
//!
//! ```bash
//! export ENVIRONMENT="development"     # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export JWT_SECRET="your-256-bit-secret"
//! export JWT_EXPIRATION_SECONDS="30000"
//! export CORS_ALLOWED_ORIGINS="http://localhost:4200"
//! export BCRYPT_COST="10"
//! ```

pub mod auth_config;
pub mod data_config;
pub mod security_config;

pub use auth_config::{CorsConfig, CsrfConfig, JwtConfig};
pub use data_config::{Environment, PasswordConfig, RateLimitConfig, ServerConfig};
pub use security_config::{AuthorizationRules, RequestMatcher, SecurityConfig};
