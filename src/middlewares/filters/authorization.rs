//! Path based access control
//!
//! Last filter of the chain. Looks up the rule for the request path and
//! checks it against the principal established by the earlier filters.

use actix_web::dev::ServiceRequest;
use async_trait::async_trait;
use crate::config::AuthorizationRules;
use crate::domain::models::auth::AccessRule;
use crate::errors::{AppError, AppResult};
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};

pub struct AuthorizationFilter {
    rules: AuthorizationRules,
}

impl AuthorizationFilter {
    pub fn new(rules: AuthorizationRules) -> Self {
        Self { rules }
    }
}

#[async_trait(?Send)]
impl SecurityFilter for AuthorizationFilter {
    fn name(&self) -> &'static str {
        "AuthorizationFilter"
    }

    async fn do_filter(&self, req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        let rule = self.rules.resolve(req.path()).unwrap_or(&AccessRule::DenyAll);

        if rule.is_granted(exchange.authentication.as_ref()) {
            return Ok(());
        }

        match &exchange.authentication {
            None => Err(AppError::AuthenticationError(
                "Full authentication is required to access this resource".to_string(),
            )),
            Some(user) => {
                log::warn!("Access denied for {} on {}", user.username, req.path());
                Err(AppError::AuthorizationError("Access Denied".to_string()))
            }
        }
    }
}
