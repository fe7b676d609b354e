//! JWT validation
//!
//! Authenticates requests that carry a JWT in `Authorization`, either raw
//! or with a `Bearer ` prefix. Skipped on `/user`, the only path where the
//! client logs in with Basic credentials; anywhere else a Basic header is
//! just an invalid token.

use std::sync::Arc;
use actix_web::dev::ServiceRequest;
use async_trait::async_trait;
use crate::errors::{AppError, AppResult};
use crate::middlewares::filters::authorization_header;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};
use crate::services::auth::TokenService;

const LOGIN_PATH: &str = "/user";

pub struct JwtTokenValidatorFilter {
    token_service: Arc<TokenService>,
}

impl JwtTokenValidatorFilter {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

#[async_trait(?Send)]
impl SecurityFilter for JwtTokenValidatorFilter {
    fn name(&self) -> &'static str {
        "JwtTokenValidatorFilter"
    }

    fn should_not_filter(&self, req: &ServiceRequest) -> bool {
        req.path() == LOGIN_PATH
    }

    async fn do_filter(&self, req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        let Some(header) = authorization_header(req) else {
            return Ok(());
        };

        let token = self.token_service.extract_token(header);
        let user = self.token_service.validate_token(token).map_err(|e| {
            log::debug!("JWT rejected: {}", e);
            AppError::AuthenticationError("Invalid Token received!".to_string())
        })?;

        exchange.authentication = Some(user);
        Ok(())
    }
}
