//! Security filter contract and per-request exchange

use actix_web::dev::ServiceRequest;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use async_trait::async_trait;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::csrf::CsrfToken;
use crate::errors::{AppError, AppResult};

/// One step of the security filter chain
///
/// Filters run in chain order before the handler. Returning an error stops
/// the chain and the error becomes the response.
#[async_trait(?Send)]
pub trait SecurityFilter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Skips the filter for this request.
    fn should_not_filter(&self, _req: &ServiceRequest) -> bool {
        false
    }

    async fn do_filter(&self, req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()>;
}

/// Mutable state shared by the filters of a single request
#[derive(Debug, Default)]
pub struct SecurityExchange {
    /// Principal established so far
    pub authentication: Option<AuthenticatedUser>,
    /// CSRF token resolved for the request
    pub csrf_token: Option<CsrfToken>,
    response_headers: Vec<(HeaderName, HeaderValue)>,
}

impl SecurityExchange {
    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }

    /// Queues a header for the outgoing response.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - the value is not a valid header value
    pub fn add_response_header(&mut self, name: HeaderName, value: &str) -> AppResult<()> {
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InternalError(format!("Invalid {} header value: {}", name, e)))?;
        self.response_headers.push((name, value));
        Ok(())
    }

    pub fn response_headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.response_headers
    }

    /// Writes the queued headers, appending so repeated `Set-Cookie` lines
    /// survive.
    pub(crate) fn apply_headers(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.response_headers {
            headers.append(name.clone(), value.clone());
        }
    }
}
