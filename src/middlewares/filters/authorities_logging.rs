//! Audit log lines around basic authentication

use actix_web::dev::ServiceRequest;
use async_trait::async_trait;
use crate::errors::AppResult;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};

/// Runs at the basic authentication position.
#[derive(Debug, Default)]
pub struct AuthoritiesLoggingAtFilter;

#[async_trait(?Send)]
impl SecurityFilter for AuthoritiesLoggingAtFilter {
    fn name(&self) -> &'static str {
        "AuthoritiesLoggingAtFilter"
    }

    async fn do_filter(&self, _req: &ServiceRequest, _exchange: &mut SecurityExchange) -> AppResult<()> {
        log::info!("Authentication Validation is in progress");
        Ok(())
    }
}

/// Logs the principal once authentication has run.
#[derive(Debug, Default)]
pub struct AuthoritiesLoggingAfterFilter;

#[async_trait(?Send)]
impl SecurityFilter for AuthoritiesLoggingAfterFilter {
    fn name(&self) -> &'static str {
        "AuthoritiesLoggingAfterFilter"
    }

    async fn do_filter(&self, _req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        if let Some(user) = &exchange.authentication {
            log::info!(
                "User {} is successfully authenticated and has the authorities {}",
                user.username,
                user.authorities_csv()
            );
        }
        Ok(())
    }
}
