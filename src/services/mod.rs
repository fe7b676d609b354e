//! Service layer
//!
//! Business logic used by the security filters and handlers. Services are
//! plain structs wired together with `Arc` in [`crate::state::AppState`].
//!
//! # Features
//!
//! - bcrypt password hashing and verification
//! - JWT issuance and validation
//! - Cookie based CSRF token repository
//! - Customer registration and credential checks
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_config();
//! let jwt = token_service.generate_token(&user)?;
//! ```

pub mod auth;
pub mod customers;
