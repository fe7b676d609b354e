use std::sync::Arc;
use actix_web::dev::ServiceRequest;
use actix_web::http::header::{self, HeaderName};
use async_trait::async_trait;
use crate::errors::AppResult;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};
use crate::services::auth::CookieCsrfTokenRepository;

/// Publishes the request's CSRF token: always as a response header, and as
/// the `XSRF-TOKEN` cookie when the token was generated for this request.
pub struct CsrfCookieFilter {
    repository: Arc<CookieCsrfTokenRepository>,
}

impl CsrfCookieFilter {
    pub fn new(repository: Arc<CookieCsrfTokenRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait(?Send)]
impl SecurityFilter for CsrfCookieFilter {
    fn name(&self) -> &'static str {
        "CsrfCookieFilter"
    }

    async fn do_filter(&self, _req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        let Some(token) = exchange.csrf_token.clone() else {
            return Ok(());
        };

        let header_name = HeaderName::try_from(token.header_name.as_str())
            .unwrap_or_else(|_| HeaderName::from_static("x-xsrf-token"));
        exchange.add_response_header(header_name, &token.token)?;

        if token.is_new {
            let cookie = self.repository.save_token(&token);
            exchange.add_response_header(header::SET_COOKIE, &cookie.to_string())?;
        }

        Ok(())
    }
}
