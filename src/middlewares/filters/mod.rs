//! Security filters, in the order the chain runs them
//!
//! ```text
//! CsrfFilter                     csrf_filter.rs
//! RequestValidationFilter        request_validation.rs
//! JwtTokenValidatorFilter        jwt_token_validator.rs
//! AuthoritiesLoggingAtFilter     authorities_logging.rs
//! BasicAuthenticationFilter      basic_authentication.rs
//! AuthoritiesLoggingAfterFilter  authorities_logging.rs
//! CsrfCookieFilter               csrf_cookie.rs
//! JwtTokenGeneratorFilter        jwt_token_generator.rs
//! AuthorizationFilter            authorization.rs
//! ```

pub mod authorities_logging;
pub mod authorization;
pub mod basic_authentication;
pub mod csrf_cookie;
pub mod csrf_filter;
pub mod jwt_token_generator;
pub mod jwt_token_validator;
pub mod request_validation;

pub use authorities_logging::{AuthoritiesLoggingAfterFilter, AuthoritiesLoggingAtFilter};
pub use authorization::AuthorizationFilter;
pub use basic_authentication::BasicAuthenticationFilter;
pub use csrf_cookie::CsrfCookieFilter;
pub use csrf_filter::CsrfFilter;
pub use jwt_token_generator::JwtTokenGeneratorFilter;
pub use jwt_token_validator::JwtTokenValidatorFilter;
pub use request_validation::RequestValidationFilter;

use actix_web::dev::ServiceRequest;
use actix_web::http::header;

/// Raw `Authorization` header value, if present and readable.
pub(crate) fn authorization_header(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
