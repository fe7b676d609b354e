//! Cookie based CSRF token repository
//!
//! The token lives in a cookie the browser resends automatically; a forged
//! cross-site request cannot read it and so cannot copy it into the
//! `X-XSRF-TOKEN` header. Verification compares the two.

use std::collections::HashMap;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceRequest;
use actix_web::web;
use uuid::Uuid;
use crate::config::CsrfConfig;
use crate::domain::models::csrf::CsrfToken;

#[derive(Debug, Clone)]
pub struct CookieCsrfTokenRepository {
    config: CsrfConfig,
}

impl CookieCsrfTokenRepository {
    pub fn new(config: CsrfConfig) -> Self {
        Self { config }
    }

    /// Repository whose cookie is readable from JavaScript.
    pub fn with_http_only_false() -> Self {
        Self::new(CsrfConfig {
            cookie_http_only: false,
            ..CsrfConfig::default()
        })
    }

    pub fn config(&self) -> &CsrfConfig {
        &self.config
    }

    /// Token previously issued to this client, if its cookie is present.
    pub fn load_token(&self, req: &ServiceRequest) -> Option<CsrfToken> {
        let cookie = req.cookie(&self.config.cookie_name)?;
        let value = cookie.value().trim();
        if value.is_empty() {
            return None;
        }

        Some(self.token(value.to_string(), false))
    }

    /// Mints a fresh random token.
    pub fn generate_token(&self) -> CsrfToken {
        self.token(Uuid::new_v4().to_string(), true)
    }

    pub fn load_or_generate(&self, req: &ServiceRequest) -> CsrfToken {
        self.load_token(req).unwrap_or_else(|| self.generate_token())
    }

    /// Cookie persisting the token on the client.
    pub fn save_token(&self, token: &CsrfToken) -> Cookie<'static> {
        Cookie::build(self.config.cookie_name.clone(), token.token.clone())
            .path(self.config.cookie_path.clone())
            .http_only(self.config.cookie_http_only)
            .finish()
    }

    /// Token the client echoed back: header first, then query parameter.
    pub fn resolve_actual_token(&self, req: &ServiceRequest) -> Option<String> {
        if let Some(value) = req
            .headers()
            .get(self.config.header_name.as_str())
            .and_then(|h| h.to_str().ok())
        {
            return Some(value.trim().to_string());
        }

        web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .ok()
            .and_then(|query| query.get(&self.config.parameter_name).cloned())
    }

    fn token(&self, token: String, is_new: bool) -> CsrfToken {
        CsrfToken {
            header_name: self.config.header_name.clone(),
            parameter_name: self.config.parameter_name.clone(),
            token,
            is_new,
        }
    }
}

/// Length-independent comparison that does not short-circuit on the first
/// differing byte.
pub fn constant_time_eq(expected: &[u8], actual: &[u8]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    expected
        .iter()
        .zip(actual.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
