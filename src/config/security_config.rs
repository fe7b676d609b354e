//! Security configuration
//!
//! Declares which routes are public and which roles the protected ones
//! require, the CORS policy, and the order of the security filters.
//!
//! | Path | Rule |
//! |------|------|
//! | `/myAccount` | role `USER` |
//! | `/myBalance` | any of `USER`, `ADMIN` |
//! | `/myLoans` | role `USER` |
//! | `/myCards` | role `USER` |
//! | `/user` | authenticated |
//! | `/notices`, `/contact`, `/register`, `/health` | public |
//!
//! The first matching rule wins; paths without a rule are denied.

use actix_cors::Cors;
use crate::config::auth_config::{CorsConfig, CsrfConfig};
use crate::domain::models::auth::AccessRule;
use crate::middlewares::SecurityFilterChain;
use crate::middlewares::filters::{
    AuthoritiesLoggingAfterFilter, AuthoritiesLoggingAtFilter, AuthorizationFilter,
    BasicAuthenticationFilter, CsrfCookieFilter, CsrfFilter, JwtTokenGeneratorFilter,
    JwtTokenValidatorFilter, RequestValidationFilter,
};
use crate::state::AppState;

/// Path pattern: either an exact path or a `/prefix/**` subtree
#[derive(Debug, Clone, PartialEq)]
pub struct RequestMatcher {
    pattern: String,
}

impl RequestMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self.pattern.strip_suffix("/**") {
            Some(prefix) => {
                prefix.is_empty()
                    || path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            None => path == self.pattern,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RouteRule {
    matchers: Vec<RequestMatcher>,
    rule: AccessRule,
}

/// Ordered path → [`AccessRule`] table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorizationRules {
    rules: Vec<RouteRule>,
}

impl AuthorizationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_matchers(mut self, patterns: &[&str], rule: AccessRule) -> Self {
        self.rules.push(RouteRule {
            matchers: patterns.iter().map(|p| RequestMatcher::new(p)).collect(),
            rule,
        });
        self
    }

    /// Rule of the first group matching `path`.
    pub fn resolve(&self, path: &str) -> Option<&AccessRule> {
        self.rules
            .iter()
            .find(|route| route.matchers.iter().any(|m| m.matches(path)))
            .map(|route| &route.rule)
    }

    /// The banking API access table.
    pub fn bank_defaults() -> Self {
        Self::new()
            .request_matchers(&["/myAccount"], AccessRule::has_role("USER"))
            .request_matchers(&["/myBalance"], AccessRule::has_any_role(&["USER", "ADMIN"]))
            .request_matchers(&["/myLoans"], AccessRule::has_role("USER"))
            .request_matchers(&["/myCards"], AccessRule::has_role("USER"))
            .request_matchers(&["/user"], AccessRule::Authenticated)
            .request_matchers(&["/notices", "/contact", "/register"], AccessRule::PermitAll)
            .request_matchers(&["/health"], AccessRule::PermitAll)
    }
}

/// Complete security setup of the service
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub authorization: AuthorizationRules,
    pub cors: CorsConfig,
    pub csrf: CsrfConfig,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            authorization: AuthorizationRules::bank_defaults(),
            cors: CorsConfig::default(),
            csrf: CsrfConfig::default(),
        }
    }
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self {
            cors: CorsConfig::from_env(),
            ..Self::default()
        }
    }

    /// Declared path access table.
    pub fn route_rules(&self) -> &AuthorizationRules {
        &self.authorization
    }

    /// CORS middleware for every route
    ///
    /// Preflight requests are answered here, before the security filters run.
    /// Requests from any other origin are refused, preflight or not.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let cors = security_config.configure_cors();
    /// App::new().wrap(cors)
    /// ```
    pub fn configure_cors(&self) -> Cors {
        let mut cors = Cors::default();

        for origin in &self.cors.allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        cors = cors
            .allowed_methods(self.cors.allowed_methods.iter().map(String::as_str))
            .allow_any_header()
            .expose_headers(self.cors.exposed_headers.iter().map(String::as_str))
            .max_age(self.cors.max_age)
            .block_on_origin_mismatch(true);

        if self.cors.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors
    }

    /// Assembles the filter chain
    ///
    /// Custom filters are positioned relative to basic authentication:
    ///
    /// ```text
    /// CsrfFilter
    /// RequestValidationFilter        (before)
    /// JwtTokenValidatorFilter        (before)
    /// AuthoritiesLoggingAtFilter     (at)
    /// BasicAuthenticationFilter
    /// AuthoritiesLoggingAfterFilter  (after)
    /// CsrfCookieFilter               (after)
    /// JwtTokenGeneratorFilter        (after)
    /// AuthorizationFilter
    /// ```
    pub fn security_filter_chain(&self, state: &AppState) -> SecurityFilterChain {
        SecurityFilterChain::builder()
            .csrf(CsrfFilter::new(state.csrf_repository.clone()))
            .http_basic(BasicAuthenticationFilter::new(state.customer_service.clone()))
            .authorize_http_requests(AuthorizationFilter::new(self.route_rules().clone()))
            .add_filter_before(RequestValidationFilter::new())
            .add_filter_after(AuthoritiesLoggingAfterFilter)
            .add_filter_at(AuthoritiesLoggingAtFilter)
            .add_filter_after(CsrfCookieFilter::new(state.csrf_repository.clone()))
            .add_filter_after(JwtTokenGeneratorFilter::new(state.token_service.clone()))
            .add_filter_before(JwtTokenValidatorFilter::new(state.token_service.clone()))
            .build()
    }
}
