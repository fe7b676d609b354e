//! CSRF protection
//!
//! Every request gets a token (loaded from the `XSRF-TOKEN` cookie or freshly
//! generated) stored in the exchange. State-changing requests outside the
//! ignored paths must echo the cookie value back in `X-XSRF-TOKEN` or the
//! `_csrf` query parameter.

use std::sync::Arc;
use actix_web::dev::ServiceRequest;
use actix_web::http::Method;
use async_trait::async_trait;
use crate::errors::{AppError, AppResult};
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};
use crate::services::auth::{constant_time_eq, CookieCsrfTokenRepository};

const INVALID_CSRF_TOKEN: &str = "Invalid CSRF token found";
const SAFE_METHODS: [Method; 4] = [Method::GET, Method::HEAD, Method::TRACE, Method::OPTIONS];

pub struct CsrfFilter {
    repository: Arc<CookieCsrfTokenRepository>,
}

impl CsrfFilter {
    pub fn new(repository: Arc<CookieCsrfTokenRepository>) -> Self {
        Self { repository }
    }

    fn requires_protection(&self, req: &ServiceRequest) -> bool {
        !SAFE_METHODS.contains(req.method()) && !self.repository.config().is_ignored(req.path())
    }
}

#[async_trait(?Send)]
impl SecurityFilter for CsrfFilter {
    fn name(&self) -> &'static str {
        "CsrfFilter"
    }

    async fn do_filter(&self, req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        let expected = self.repository.load_or_generate(req);
        let is_new = expected.is_new;
        exchange.csrf_token = Some(expected.clone());

        if !self.requires_protection(req) {
            return Ok(());
        }

        // A token minted for this request cannot have been echoed back
        if is_new {
            log::debug!("No CSRF cookie on {} {}", req.method(), req.path());
            return Err(AppError::CsrfError(INVALID_CSRF_TOKEN.to_string()));
        }

        let actual = self.repository.resolve_actual_token(req).unwrap_or_default();
        if !constant_time_eq(expected.token.as_bytes(), actual.as_bytes()) {
            log::debug!("CSRF token mismatch on {} {}", req.method(), req.path());
            return Err(AppError::CsrfError(INVALID_CSRF_TOKEN.to_string()));
        }

        Ok(())
    }
}
