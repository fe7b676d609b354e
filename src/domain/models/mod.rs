//! Security models carried through the filter chain.

pub mod auth;
pub mod csrf;
pub mod token;

pub use auth::{AccessRule, AuthenticatedUser, BasicCredentials};
pub use csrf::CsrfToken;
pub use token::JwtClaims;
