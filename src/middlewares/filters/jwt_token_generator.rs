use std::sync::Arc;
use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use async_trait::async_trait;
use crate::errors::AppResult;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};
use crate::services::auth::TokenService;

const LOGIN_PATH: &str = "/user";

/// Issues a JWT in the `Authorization` response header after a successful
/// login on `/user`.
pub struct JwtTokenGeneratorFilter {
    token_service: Arc<TokenService>,
}

impl JwtTokenGeneratorFilter {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

#[async_trait(?Send)]
impl SecurityFilter for JwtTokenGeneratorFilter {
    fn name(&self) -> &'static str {
        "JwtTokenGeneratorFilter"
    }

    fn should_not_filter(&self, req: &ServiceRequest) -> bool {
        req.path() != LOGIN_PATH
    }

    async fn do_filter(&self, _req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        let Some(user) = exchange.authentication.clone() else {
            return Ok(());
        };

        let jwt = self.token_service.generate_token(&user)?;
        exchange.add_response_header(header::AUTHORIZATION, &jwt)?;
        log::debug!("JWT issued for {}", user.username);
        Ok(())
    }
}
